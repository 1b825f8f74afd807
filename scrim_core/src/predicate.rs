// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event predicates deciding whether input closes the overlay.
//!
//! - [`is_escape`] — only the exact `"Escape"` key value closes.
//! - [`click_closes`] — a click closes unless its target sits inside one of
//!   the [`ProtectedRegions`], found by matching ancestors from the target up
//!   to the document root.

use alloc::borrow::Cow;
use alloc::vec::Vec;

/// The `KeyboardEvent.key` value of the Escape key.
pub const ESCAPE_KEY: &str = "Escape";

/// Returns whether `key` is exactly the Escape key.
#[must_use]
pub fn is_escape(key: &str) -> bool {
    key == ESCAPE_KEY
}

/// The target of a click, as seen by the click-outside predicate.
pub trait ClickTarget {
    /// Returns whether the target is an element (as opposed to a text node,
    /// the document, or some other event target).
    fn is_element(&self) -> bool;

    /// Returns whether the target or one of its ancestors matches `selector`.
    ///
    /// A selector the platform cannot parse never matches.
    fn closest_matches(&self, selector: &str) -> bool;
}

/// Selectors for the content regions where clicks count as interaction.
const DEFAULT_REGIONS: [&str; 3] = [
    ".js-mediatable .js-modal-panel .js-mediaembed",
    ".med-tweet",
    ".mdl-btn-media",
];

/// Ordered set of protected-region selectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtectedRegions {
    selectors: Vec<Cow<'static, str>>,
}

impl Default for ProtectedRegions {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_REGIONS.iter().map(|s| Cow::Borrowed(*s)).collect(),
        }
    }
}

impl ProtectedRegions {
    /// Creates an empty set; every element click closes the overlay.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            selectors: Vec::new(),
        }
    }

    /// Adds a selector.
    #[must_use]
    pub fn with(mut self, selector: impl Into<Cow<'static, str>>) -> Self {
        self.selectors.push(selector.into());
        self
    }

    /// Returns the selectors in match order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(|s| s.as_ref())
    }

    /// Returns whether `target` lies inside any protected region.
    ///
    /// Selectors are tried one by one, so a selector the platform rejects
    /// cannot mask the others.
    #[must_use]
    pub fn contains<T: ClickTarget + ?Sized>(&self, target: &T) -> bool {
        self.selectors().any(|sel| target.closest_matches(sel))
    }
}

/// Returns whether a click on the overlay surface should close it.
///
/// Missing and non-element targets close; element targets close unless they
/// resolve into a protected region.
#[must_use]
pub fn click_closes<T: ClickTarget + ?Sized>(
    target: Option<&T>,
    regions: &ProtectedRegions,
) -> bool {
    match target {
        Some(t) if t.is_element() => !regions.contains(t),
        _ => true,
    }
}
