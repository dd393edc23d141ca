use serde::{Deserialize, Serialize};

/// User-supplied signature content. An empty string means "omit this line".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignatureData {
    /// Photo URL or embedded `data:` URI
    pub photo: String,
    pub full_name: String,
    pub job_title: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub address: String,
    pub social_links: Vec<SocialLink>,
    pub cta_text: String,
    pub cta_link: String,
    pub additional_cta_text: String,
    pub additional_cta_link: String,
}

impl SignatureData {
    /// Social links that will actually render (non-empty url).
    pub fn present_social_links(&self) -> impl Iterator<Item = &SocialLink> {
        self.social_links.iter().filter(|l| !l.url.is_empty())
    }

    pub fn has_cta(&self) -> bool {
        !self.cta_text.is_empty() && !self.cta_link.is_empty()
    }

    pub fn has_additional_cta(&self) -> bool {
        !self.additional_cta_text.is_empty() && !self.additional_cta_link.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Twitter,
    Github,
    Instagram,
    Facebook,
    Youtube,
    Other,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 7] = [
        SocialPlatform::Linkedin,
        SocialPlatform::Twitter,
        SocialPlatform::Github,
        SocialPlatform::Instagram,
        SocialPlatform::Facebook,
        SocialPlatform::Youtube,
        SocialPlatform::Other,
    ];

    /// Display text used for the link.
    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Twitter => "X",
            SocialPlatform::Github => "GitHub",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Youtube => "YouTube",
            SocialPlatform::Other => "Link",
        }
    }

    /// Stable lowercase key, matching the serde name.
    pub fn key(self) -> &'static str {
        match self {
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Github => "github",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Other => "other",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}
