// ABOUTME: Domain models shared by the store, renderers, and routes
// ABOUTME: Re-exports editor profile and subscription types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

mod editor;
mod subscription;

pub use editor::{AvailabilityStatus, EditorProfile, LinkedAccount, UserType};
pub use subscription::{SubscriptionTier, UsageLimit};
