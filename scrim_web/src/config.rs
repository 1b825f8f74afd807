// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM naming configuration.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

use scrim_core::predicate::ProtectedRegions;

/// Selectors, class and attribute names used by [`DomHost`](crate::DomHost).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomConfig {
    /// Selector resolving the overlay surface.
    pub surface_selector: Cow<'static, str>,
    /// Class toggled on the surface while open.
    pub open_class: Cow<'static, str>,
    /// Attribute holding the correlation id.
    pub correlation_attribute: Cow<'static, str>,
    /// Marker attribute identifying the content sizer.
    pub sizer_attribute: Cow<'static, str>,
    /// Regions where clicks do not close the overlay.
    pub regions: ProtectedRegions,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            surface_selector: Cow::Borrowed("#scrim-fullscreen-root"),
            open_class: Cow::Borrowed("open"),
            correlation_attribute: Cow::Borrowed("data-scrim-modal-uuid"),
            sizer_attribute: Cow::Borrowed("data-scrim-modal-content-sizer"),
            regions: ProtectedRegions::default(),
        }
    }
}

impl DomConfig {
    /// Sets the surface selector.
    #[must_use]
    pub fn with_surface_selector(mut self, selector: impl Into<Cow<'static, str>>) -> Self {
        self.surface_selector = selector.into();
        self
    }

    /// Sets the open marker class.
    #[must_use]
    pub fn with_open_class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        self.open_class = class.into();
        self
    }

    /// Sets the correlation attribute name.
    #[must_use]
    pub fn with_correlation_attribute(mut self, attr: impl Into<Cow<'static, str>>) -> Self {
        self.correlation_attribute = attr.into();
        self
    }

    /// Sets the content-sizer marker attribute name.
    #[must_use]
    pub fn with_sizer_attribute(mut self, attr: impl Into<Cow<'static, str>>) -> Self {
        self.sizer_attribute = attr.into();
        self
    }

    /// Sets the protected regions.
    #[must_use]
    pub fn with_regions(mut self, regions: ProtectedRegions) -> Self {
        self.regions = regions;
        self
    }

    /// Selector matching the content sizer.
    #[must_use]
    pub fn sizer_selector(&self) -> String {
        format!("[{}]", self.sizer_attribute)
    }

    /// Selector matching an image or video inside the content sizer.
    #[must_use]
    pub fn media_selector(&self) -> String {
        let sizer = self.sizer_selector();
        format!("{sizer} img, {sizer} video")
    }
}
