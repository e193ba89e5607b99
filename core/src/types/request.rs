use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Top-level body of a `shortLinks` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicLinkRequest {
    pub dynamic_link_info: DynamicLinkInfo,
    #[serde(default)]
    pub suffix: Suffix,
}

impl DynamicLinkRequest {
    pub fn new(dynamic_link_info: DynamicLinkInfo, suffix: Suffix) -> Self {
        Self {
            dynamic_link_info,
            suffix,
        }
    }

    /// JSON text sent on the wire.
    pub fn to_encoded_body(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::Serialization)
    }

    /// Reject requests the API would refuse: an empty `link`, or an empty
    /// required field inside an included nested object.
    pub fn validate(&self) -> Result<(), Error> {
        let info = &self.dynamic_link_info;
        require("link", &info.link)?;
        if let Some(android) = &info.android_info {
            require("androidInfo.androidPackageName", &android.android_package_name)?;
        }
        if let Some(ios) = &info.ios_info {
            require("iosInfo.iosBundleId", &ios.ios_bundle_id)?;
            require("iosInfo.iosAppStoreId", &ios.ios_app_store_id)?;
        }
        if let Some(social) = &info.social_meta_tag_info {
            require("socialMetaTagInfo.socialTitle", &social.social_title)?;
            require("socialMetaTagInfo.socialDescription", &social.social_description)?;
            require("socialMetaTagInfo.socialImageLink", &social.social_image_link)?;
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidRequest(format!("`{field}` must not be empty")));
    }
    Ok(())
}

/// The long link plus optional routing, analytics and preview metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicLinkInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_uri_prefix: Option<String>,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_info: Option<AndroidInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_info: Option<IosInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_info: Option<NavigationInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_info: Option<AnalyticsInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_meta_tag_info: Option<SocialMetaTagInfo>,
}

impl DynamicLinkInfo {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            domain_uri_prefix: None,
            link: link.into(),
            android_info: None,
            ios_info: None,
            navigation_info: None,
            analytics_info: None,
            social_meta_tag_info: None,
        }
    }

    pub fn with_domain_uri_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.domain_uri_prefix = Some(prefix.into());
        self
    }

    pub fn with_android_info(mut self, info: AndroidInfo) -> Self {
        self.android_info = Some(info);
        self
    }

    pub fn with_ios_info(mut self, info: IosInfo) -> Self {
        self.ios_info = Some(info);
        self
    }

    pub fn with_navigation_info(mut self, info: NavigationInfo) -> Self {
        self.navigation_info = Some(info);
        self
    }

    pub fn with_analytics_info(mut self, info: AnalyticsInfo) -> Self {
        self.analytics_info = Some(info);
        self
    }

    pub fn with_social_meta_tag_info(mut self, info: SocialMetaTagInfo) -> Self {
        self.social_meta_tag_info = Some(info);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidInfo {
    pub android_package_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_fallback_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_min_package_version_code: Option<String>,
}

impl AndroidInfo {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            android_package_name: package_name.into(),
            android_fallback_link: None,
            android_min_package_version_code: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosInfo {
    pub ios_bundle_id: String,
    pub ios_app_store_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_fallback_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_custom_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_ipad_fallback_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_ipad_bundle_id: Option<String>,
}

impl IosInfo {
    pub fn new(bundle_id: impl Into<String>, app_store_id: impl Into<String>) -> Self {
        Self {
            ios_bundle_id: bundle_id.into(),
            ios_app_store_id: app_store_id.into(),
            ios_fallback_link: None,
            ios_custom_scheme: None,
            ios_ipad_fallback_link: None,
            ios_ipad_bundle_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationInfo {
    pub enable_forced_redirect: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_play_analytics: Option<GooglePlayAnalytics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itunes_connect_analytics: Option<ItunesConnectAnalytics>,
}

/// UTM parameters attached to the Play Store install.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePlayAnalytics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gclid: Option<String>,
}

/// iTunes Connect affiliate parameters. The vendor uses two-letter keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItunesConnectAnalytics {
    #[serde(rename = "at")]
    pub affiliate_token: String,
    #[serde(rename = "ct")]
    pub campaign_text: String,
    #[serde(rename = "mt")]
    pub media_type: ItcMediaType,
    #[serde(rename = "pt")]
    pub provider_token: String,
}

/// iTunes Connect media type, sent as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ItcMediaType {
    Music = 1,
    Podcasts = 2,
    Audiobooks = 3,
    TvShows = 4,
    MusicVideos = 5,
    Movies = 6,
    IpodGames = 7,
    MobileSoftwareApplications = 8,
    Ringtones = 9,
    ItunesU = 10,
    EBooks = 11,
    DesktopApps = 12,
}

impl From<ItcMediaType> for u8 {
    fn from(media_type: ItcMediaType) -> Self {
        media_type as u8
    }
}

impl TryFrom<u8> for ItcMediaType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let media_type = match code {
            1 => ItcMediaType::Music,
            2 => ItcMediaType::Podcasts,
            3 => ItcMediaType::Audiobooks,
            4 => ItcMediaType::TvShows,
            5 => ItcMediaType::MusicVideos,
            6 => ItcMediaType::Movies,
            7 => ItcMediaType::IpodGames,
            8 => ItcMediaType::MobileSoftwareApplications,
            9 => ItcMediaType::Ringtones,
            10 => ItcMediaType::ItunesU,
            11 => ItcMediaType::EBooks,
            12 => ItcMediaType::DesktopApps,
            other => return Err(format!("unknown iTunes Connect media type {other}")),
        };
        Ok(media_type)
    }
}

/// Link preview shown when the short link is shared on social networks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetaTagInfo {
    pub social_title: String,
    pub social_description: String,
    pub social_image_link: String,
}

/// Shortening strategy for the generated path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suffix {
    pub option: SuffixOption,
}

impl Suffix {
    pub fn new(option: SuffixOption) -> Self {
        Self { option }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuffixOption {
    /// Short path, guessable by enumeration.
    #[default]
    Short,
    /// 17-character path that cannot practically be guessed.
    Unguessable,
}
