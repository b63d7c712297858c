// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

pub(crate) mod bucket;
pub(crate) mod flatscan;
