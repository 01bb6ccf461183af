// SPDX-License-Identifier: MPL-2.0

//! Page view modules for the Vista application.

pub mod gallery;
