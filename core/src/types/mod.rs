//! Wire models for the Dynamic Links API.
//!
//! # Design
//! Field names follow the vendor's JSON exactly (camelCase, plus the short
//! iTunes Connect keys `at`/`ct`/`mt`/`pt`). Unset optionals are omitted from
//! the output rather than sent as `null`. Models are plain immutable values
//! built fresh per call.

pub mod request;
pub mod response;

pub use request::{
    AnalyticsInfo, AndroidInfo, DynamicLinkInfo, DynamicLinkRequest, GooglePlayAnalytics,
    IosInfo, ItcMediaType, ItunesConnectAnalytics, NavigationInfo, SocialMetaTagInfo, Suffix,
    SuffixOption,
};
pub use response::{DynamicLink, Warning};
