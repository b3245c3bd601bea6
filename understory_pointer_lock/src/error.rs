// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the controller.

/// Why a controller could not be started.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PointerLockError {
    /// The host has no pointer-lock facility.
    ///
    /// Check [`is_support_pointer_lock`](crate::is_support_pointer_lock) first,
    /// or handle this error; retrying will not help.
    #[error("pointer lock is not supported by the host")]
    Unsupported,
}
