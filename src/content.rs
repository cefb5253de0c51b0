//! Static content store: everything the page says, shows or links to.
//!
//! Loaded once at startup, read-only afterwards. A section whose required
//! fields are empty is a valid, silent configuration state: it contributes
//! nothing to the page (no height, no triggers, no frame output). Absence is
//! never an error.

use crate::error::{ScrollkitError, ScrollkitResult};

/// Number of faces a showcase cube texture set must cover.
pub const CUBE_FACES: usize = 6;

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SiteContent {
    pub site: SiteMeta,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub showcase: ShowcaseContent,
    pub gallery: GalleryContent,
    #[serde(default)]
    pub schedule: ScheduleContent,
    pub footer: FooterContent,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub language: String,
}

/// Closed icon vocabulary shared by nav items, showcase entries and social
/// links. The host maps these to whatever glyph set it renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Disc,
    Play,
    Calendar,
    Music,
    Code,
    User,
    Briefcase,
    Mail,
    Brain,
    Layers,
    Smartphone,
    Cloud,
    Github,
    Linkedin,
    Twitter,
    Telegram,
    Instagram,
    Youtube,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NavItem {
    pub label: String,
    pub section: String,
    pub icon: Icon,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub target: String,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct HeroContent {
    pub background_image: String,
    pub brand_name: String,
    pub decode_text: String,
    /// Alphabet the decode effect scrambles with. Empty falls back to the
    /// built-in default.
    #[serde(default)]
    pub decode_alphabet: String,
    pub subtitle: String,
    pub tagline: String,
    pub cta_primary: Option<CallToAction>,
    pub cta_secondary: Option<CallToAction>,
    pub corner_label: String,
    pub corner_detail: String,
    #[serde(default)]
    pub nav: Vec<NavItem>,
}

impl HeroContent {
    pub fn is_empty(&self) -> bool {
        self.decode_text.is_empty() && self.brand_name.is_empty() && self.nav.is_empty()
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct AboutContent {
    pub section_label: String,
    pub section_title: String,
    pub creator_name: String,
    pub creator_title: String,
    pub bio: String,
    pub portrait_image: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl AboutContent {
    pub fn is_empty(&self) -> bool {
        self.creator_name.is_empty() && self.bio.is_empty()
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ShowcaseItem {
    pub name: String,
    pub category: String,
    pub icon: Icon,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ShowcaseContent {
    pub section_label: String,
    pub section_title: String,
    pub section_subtitle: String,
    /// One texture URL per cube face; either empty (section disabled) or
    /// exactly [`CUBE_FACES`] entries.
    #[serde(default)]
    pub cube_textures: Vec<String>,
    pub scroll_hint: String,
    #[serde(default)]
    pub items: Vec<ShowcaseItem>,
}

impl ShowcaseContent {
    pub fn is_empty(&self) -> bool {
        self.cube_textures.is_empty()
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct StripImage {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: String,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct GalleryContent {
    pub section_label: String,
    pub section_title: String,
    pub section_subtitle: String,
    #[serde(default)]
    pub marquee: Vec<String>,
    pub end_cta: String,
    #[serde(default)]
    pub strip_top: Vec<StripImage>,
    #[serde(default)]
    pub strip_bottom: Vec<StripImage>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl GalleryContent {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.section_title.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStatus {
    OnSale,
    SoldOut,
    ComingSoon,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TourDate {
    pub date: String,
    pub time: String,
    pub city: String,
    pub venue: String,
    pub status: DateStatus,
    pub image: String,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct StatusLabels {
    pub on_sale: String,
    pub sold_out: String,
    pub coming_soon: String,
    pub default: String,
}

/// Tour/schedule section. Ships disabled (all-empty) in the default site and
/// stays dormant until someone fills it in.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ScheduleContent {
    pub section_label: String,
    pub section_title: String,
    pub vinyl_image: String,
    pub buy_label: String,
    pub details_label: String,
    pub bottom_note: String,
    pub bottom_cta: String,
    #[serde(default)]
    pub status_labels: StatusLabels,
    #[serde(default)]
    pub dates: Vec<TourDate>,
}

impl ScheduleContent {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.section_title.is_empty()
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Newsletter {
    pub title: String,
    pub description: String,
    pub button_label: String,
    pub confirmation: String,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct FooterContent {
    pub portrait_image: String,
    pub portrait_alt: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub artist_label: String,
    pub artist_name: String,
    pub artist_subtitle: String,
    pub brand_name: String,
    pub brand_description: String,
    pub quick_links_title: String,
    #[serde(default)]
    pub quick_links: Vec<String>,
    pub contact_title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub newsletter: Newsletter,
    pub copyright: String,
    #[serde(default)]
    pub bottom_links: Vec<String>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl FooterContent {
    pub fn is_empty(&self) -> bool {
        self.brand_name.is_empty() && self.hero_title.is_empty()
    }
}

impl SiteContent {
    pub fn from_json_str(s: &str) -> ScrollkitResult<Self> {
        let content: Self = serde_json::from_str(s)
            .map_err(|e| ScrollkitError::content(format!("parse site JSON: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    pub fn from_json_reader(r: impl std::io::Read) -> ScrollkitResult<Self> {
        let content: Self = serde_json::from_reader(r)
            .map_err(|e| ScrollkitError::content(format!("parse site JSON: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    /// Structural checks on non-empty sections. Empty sections are always
    /// valid, whatever else they carry.
    pub fn validate(&self) -> ScrollkitResult<()> {
        if !self.showcase.is_empty() && self.showcase.cube_textures.len() != CUBE_FACES {
            return Err(ScrollkitError::validation(format!(
                "showcase cube needs exactly {CUBE_FACES} textures, got {}",
                self.showcase.cube_textures.len()
            )));
        }
        if !self.showcase.is_empty() && self.showcase.items.is_empty() {
            return Err(ScrollkitError::validation(
                "showcase with textures must list at least one item",
            ));
        }
        for (i, item) in self.hero.nav.iter().enumerate() {
            if item.section.trim().is_empty() {
                return Err(ScrollkitError::validation(format!(
                    "hero nav item {i} has an empty section target"
                )));
            }
        }
        for (i, p) in self.gallery.projects.iter().enumerate() {
            if p.title.trim().is_empty() {
                return Err(ScrollkitError::validation(format!(
                    "gallery project {i} has an empty title"
                )));
            }
        }
        Ok(())
    }
}
