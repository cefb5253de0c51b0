//! Page evaluator: layout, trigger wiring and the per-tick frame.
//!
//! A [`Page`] owns every piece of runtime state for one single-page session:
//! the content store, the trigger set, the smooth-scroll controller, the
//! asset tracker and each present section's mapper state. Sections whose
//! content is empty are skipped entirely at build time: they get no height,
//! no triggers and no frame output.

use std::collections::BTreeMap;

use crate::{
    assets::AssetTracker,
    content::SiteContent,
    core::{ScrollRange, ScrollSample, Vec2, Viewport},
    ease::Ease,
    error::ScrollkitResult,
    mappers::{
        cube::{CubeMapper, CubeParams, CubeStyle},
        decode::{DecodeText, DEFAULT_REVEAL_RATE, TICK_INTERVAL_SECS},
        entrance::{Entrance, EntranceCue, EntranceSpec},
        parallax::{self, ParallaxOffsets, ParallaxStyle},
    },
    scroll::{TriggerEvent, TriggerId, TriggerSet, TriggerSpec},
    smooth::{SmoothScroll, SmoothScrollOpts},
};

// Section heights in viewport units. Layout here is coarse by design: the
// host owns real measurement, the engine only needs consistent trigger
// ranges.
const HERO_VH: f64 = 1.0;
const ABOUT_VH: f64 = 1.5;
const SHOWCASE_VISIBLE_VH: f64 = 1.0;
const SHOWCASE_PIN_VH: f64 = 3.0;
const GALLERY_STRIPS_VH: f64 = 0.8;
const GALLERY_MARQUEE_VH: f64 = 0.2;
const GALLERY_GRID_ROW_VH: f64 = 0.6;
const GALLERY_TAIL_VH: f64 = 0.4;
const SCHEDULE_VH: f64 = 1.0;
const FOOTER_VH: f64 = 1.0;

/// Scrub catch-up time for scroll-coupled triggers.
const SCRUB_SECS: f64 = 1.0;

/// Fixed number of staggered copy blocks in the about section.
const ABOUT_ANIMATED_ITEMS: usize = 6;

/// About portrait drift over its scrub range, in pixels.
const PORTRAIT_DRIFT_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Section {
    Hero,
    About,
    Showcase,
    Gallery,
    Schedule,
    Footer,
}

struct HeroState {
    decode: DecodeText,
    decode_acc: f64,
    intro: Option<Vec<EntranceCue>>,
}

struct AboutState {
    content_trigger: TriggerId,
    portrait_trigger: TriggerId,
    stats_trigger: TriggerId,
    content_entrance: Entrance,
    stats_entrance: Entrance,
    portrait_y: f64,
}

struct ShowcaseState {
    trigger: TriggerId,
    mapper: CubeMapper,
    params: CubeParams,
    pin_offset: Option<f64>,
    list_cues: Option<Vec<EntranceCue>>,
}

struct GalleryState {
    strips_trigger: TriggerId,
    grid_trigger: TriggerId,
    grid_entrance: Entrance,
    style: ParallaxStyle,
    offsets: ParallaxOffsets,
}

struct ScheduleState {
    trigger: TriggerId,
    entrance: Entrance,
}

/// One render tick's worth of presentation parameters, host-serializable.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PageFrame {
    pub scroll_y: f64,
    pub settled: bool,
    pub hero: Option<HeroFrame>,
    pub about: Option<AboutFrame>,
    pub showcase: Option<ShowcaseFrame>,
    pub gallery: Option<GalleryFrame>,
    pub schedule: Option<ScheduleFrame>,
    pub footer: Option<FooterFrame>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct HeroFrame {
    pub display_text: String,
    pub decoding: bool,
    /// Mount-time fade-in cues, present on the first frame only.
    pub intro: Option<Vec<EntranceCue>>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct AboutFrame {
    /// Portrait parallax drift in pixels.
    pub portrait_y: f64,
    pub content_cues: Option<Vec<EntranceCue>>,
    pub stat_cues: Option<Vec<EntranceCue>>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ShowcaseFrame {
    pub params: CubeParams,
    /// Layout offset holding the section pinned while its range is active.
    pub pin_offset: Option<f64>,
    /// False until every cube texture has loaded.
    pub first_paint: bool,
    pub list_cues: Option<Vec<EntranceCue>>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct GalleryFrame {
    pub offsets: ParallaxOffsets,
    pub grid_cues: Option<Vec<EntranceCue>>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ScheduleFrame {
    pub row_cues: Option<Vec<EntranceCue>>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct FooterFrame {}

pub struct Page {
    content: SiteContent,
    viewport: Viewport,
    triggers: TriggerSet,
    scroller: SmoothScroll,
    assets: AssetTracker,
    tops: BTreeMap<Section, f64>,
    document_height: f64,
    hero: Option<HeroState>,
    about: Option<AboutState>,
    showcase: Option<ShowcaseState>,
    gallery: Option<GalleryState>,
    schedule: Option<ScheduleState>,
    footer_present: bool,
}

fn event_for(events: &[TriggerEvent], id: TriggerId) -> Option<&TriggerEvent> {
    events.iter().find(|e| e.id == id)
}

impl Page {
    #[tracing::instrument(skip(content))]
    pub fn new(content: SiteContent, viewport: Viewport) -> ScrollkitResult<Self> {
        content.validate()?;
        let vh = viewport.height;

        let mut triggers = TriggerSet::new();
        let mut assets = AssetTracker::new();
        let mut tops = BTreeMap::new();
        let mut cursor = 0.0;

        let hero = (!content.hero.is_empty())
            .then(|| -> ScrollkitResult<HeroState> {
                tops.insert(Section::Hero, cursor);
                cursor += HERO_VH * vh;
                assets.track(&content.hero.background_image);
                Ok(HeroState {
                    decode: DecodeText::new(
                        &content.hero.decode_text,
                        &content.hero.decode_alphabet,
                        DEFAULT_REVEAL_RATE,
                        0,
                    )?,
                    decode_acc: 0.0,
                    intro: Some(hero_intro_cues()),
                })
            })
            .transpose()?;

        let about = (!content.about.is_empty())
            .then(|| -> ScrollkitResult<AboutState> {
                let top = cursor;
                tops.insert(Section::About, top);
                let height = ABOUT_VH * vh;
                cursor += height;
                assets.track(&content.about.portrait_image);

                let content_trigger = triggers.register(TriggerSpec::once(ScrollRange::new(
                    top - 0.8 * vh,
                    top + 0.2 * vh,
                )?));
                let portrait_trigger = triggers.register(TriggerSpec::scrubbed(
                    ScrollRange::new(top - vh, top + height)?,
                    SCRUB_SECS,
                ));
                let stats_top = top + 0.75 * height;
                let stats_trigger = triggers.register(TriggerSpec::once(ScrollRange::new(
                    stats_top - 0.85 * vh,
                    stats_top + 0.15 * vh,
                )?));

                Ok(AboutState {
                    content_trigger,
                    portrait_trigger,
                    stats_trigger,
                    content_entrance: Entrance::new(EntranceSpec::rise(50.0, 0.15)),
                    stats_entrance: Entrance::new(EntranceSpec::pop()),
                    portrait_y: -PORTRAIT_DRIFT_PX / 2.0,
                })
            })
            .transpose()?;

        let showcase = (!content.showcase.is_empty())
            .then(|| -> ScrollkitResult<ShowcaseState> {
                let top = cursor;
                tops.insert(Section::Showcase, top);
                cursor += (SHOWCASE_VISIBLE_VH + SHOWCASE_PIN_VH) * vh;
                for tex in &content.showcase.cube_textures {
                    assets.track(tex);
                }

                let trigger = triggers.register(TriggerSpec::pinned(
                    ScrollRange::new(top, top + SHOWCASE_PIN_VH * vh)?,
                    SCRUB_SECS,
                ));
                let mut mapper =
                    CubeMapper::new(content.showcase.items.len(), CubeStyle::default())?;
                let params = mapper.update(ScrollSample::rest());
                let list_cues =
                    Entrance::new(EntranceSpec::slide_left()).fire(content.showcase.items.len());

                Ok(ShowcaseState {
                    trigger,
                    mapper,
                    params,
                    pin_offset: None,
                    list_cues,
                })
            })
            .transpose()?;

        let gallery = (!content.gallery.is_empty())
            .then(|| -> ScrollkitResult<GalleryState> {
                let top = cursor;
                tops.insert(Section::Gallery, top);
                let strips_h = GALLERY_STRIPS_VH * vh;
                let grid_rows = content.gallery.projects.len().div_ceil(3);
                let height = strips_h
                    + (GALLERY_MARQUEE_VH + GALLERY_TAIL_VH) * vh
                    + grid_rows as f64 * GALLERY_GRID_ROW_VH * vh;
                cursor += height;

                let strips_trigger = triggers.register(TriggerSpec::scrubbed(
                    ScrollRange::new(top - vh, top + strips_h)?,
                    SCRUB_SECS,
                ));
                let grid_top = top + strips_h + GALLERY_MARQUEE_VH * vh;
                let grid_trigger = triggers.register(TriggerSpec::once(ScrollRange::new(
                    grid_top - 0.8 * vh,
                    grid_top + 0.2 * vh,
                )?));

                let style = ParallaxStyle::default();
                Ok(GalleryState {
                    strips_trigger,
                    grid_trigger,
                    grid_entrance: Entrance::new(EntranceSpec::rise(60.0, 0.15)),
                    style,
                    offsets: parallax::offsets(style, 0.0),
                })
            })
            .transpose()?;

        let schedule = (!content.schedule.is_empty())
            .then(|| -> ScrollkitResult<ScheduleState> {
                let top = cursor;
                tops.insert(Section::Schedule, top);
                cursor += SCHEDULE_VH * vh;

                let trigger = triggers.register(TriggerSpec::once(ScrollRange::new(
                    top - 0.8 * vh,
                    top + 0.2 * vh,
                )?));
                Ok(ScheduleState {
                    trigger,
                    entrance: Entrance::new(EntranceSpec::rise(40.0, 0.1)),
                })
            })
            .transpose()?;

        let footer_present = !content.footer.is_empty();
        if footer_present {
            tops.insert(Section::Footer, cursor);
            cursor += FOOTER_VH * vh;
        }

        let document_height = cursor;
        let scroller = SmoothScroll::new(SmoothScrollOpts {
            max_scroll: (document_height - vh).max(0.0),
            ..SmoothScrollOpts::default()
        })?;

        tracing::debug!(
            document_height,
            triggers = triggers.len(),
            "page constructed"
        );

        Ok(Self {
            content,
            viewport,
            triggers,
            scroller,
            assets,
            tops,
            document_height,
            hero,
            about,
            showcase,
            gallery,
            schedule,
            footer_present,
        })
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroller.current()
    }

    pub fn is_settled(&self) -> bool {
        self.scroller.is_settled()
    }

    /// Feed a wheel delta into the smooth-scroll controller.
    pub fn wheel(&mut self, delta: f64) {
        self.scroller.on_wheel(delta);
    }

    /// Smooth-scroll to a nav target id ("about", "techstack", "projects",
    /// "contact"). Unknown or absent targets are a silent no-op; returns
    /// whether the target resolved.
    pub fn scroll_to_section(&mut self, target: &str) -> bool {
        let section = match target {
            "about" => Section::About,
            "techstack" => Section::Showcase,
            "projects" => Section::Gallery,
            "contact" => Section::Footer,
            _ => return false,
        };
        match self.tops.get(&section) {
            Some(&top) => {
                self.scroller.scroll_to(top);
                true
            }
            None => false,
        }
    }

    /// Host callback: a tracked asset finished loading.
    pub fn mark_asset_ready(&mut self, url: &str) {
        self.assets.mark_ready(url);
    }

    /// Host callback: a tracked asset failed. Degrades to a blank area.
    pub fn mark_asset_failed(&mut self, url: &str) {
        self.assets.mark_failed(url);
    }

    /// Advance the whole page by `dt` seconds and evaluate one frame.
    ///
    /// All mappers read the same scroll snapshot; entrance cues appear only
    /// on the tick their trigger fires.
    #[tracing::instrument(skip(self), level = "trace")]
    pub fn advance(&mut self, dt: f64) -> PageFrame {
        let scroll_y = self.scroller.tick(dt);
        let events = self.triggers.advance(scroll_y, dt);

        let hero = self.hero.as_mut().map(|state| {
            state.decode_acc += dt;
            while state.decode_acc >= TICK_INTERVAL_SECS {
                state.decode_acc -= TICK_INTERVAL_SECS;
                state.decode.advance();
            }
            HeroFrame {
                display_text: state.decode.display(),
                decoding: !state.decode.is_revealed(),
                intro: state.intro.take(),
            }
        });

        let about_stats = self.content.about.stats.len();
        let about = self.about.as_mut().map(|state| {
            let content_cues = event_for(&events, state.content_trigger)
                .filter(|e| e.entered)
                .and_then(|_| state.content_entrance.fire(ABOUT_ANIMATED_ITEMS));
            let stat_cues = event_for(&events, state.stats_trigger)
                .filter(|e| e.entered)
                .and_then(|_| state.stats_entrance.fire(about_stats));
            if let Some(e) = event_for(&events, state.portrait_trigger) {
                state.portrait_y =
                    e.sample.progress * PORTRAIT_DRIFT_PX - PORTRAIT_DRIFT_PX / 2.0;
            }
            AboutFrame {
                portrait_y: state.portrait_y,
                content_cues,
                stat_cues,
            }
        });

        let textures = &self.content.showcase.cube_textures;
        let assets = &self.assets;
        let showcase = self.showcase.as_mut().map(|state| {
            if let Some(e) = event_for(&events, state.trigger) {
                state.params = state.mapper.update(e.sample);
                state.pin_offset = e.pin_offset;
            }
            ShowcaseFrame {
                params: state.params,
                pin_offset: state.pin_offset,
                first_paint: assets.all_ready(textures.iter().map(String::as_str)),
                list_cues: state.list_cues.take(),
            }
        });

        let project_count = self.content.gallery.projects.len();
        let gallery = self.gallery.as_mut().map(|state| {
            if let Some(e) = event_for(&events, state.strips_trigger) {
                state.offsets = parallax::offsets(state.style, e.sample.progress);
            }
            let grid_cues = event_for(&events, state.grid_trigger)
                .filter(|e| e.entered)
                .and_then(|_| state.grid_entrance.fire(project_count));
            GalleryFrame {
                offsets: state.offsets,
                grid_cues,
            }
        });

        let date_count = self.content.schedule.dates.len();
        let schedule = self.schedule.as_mut().map(|state| {
            let row_cues = event_for(&events, state.trigger)
                .filter(|e| e.entered)
                .and_then(|_| state.entrance.fire(date_count));
            ScheduleFrame { row_cues }
        });

        PageFrame {
            scroll_y,
            settled: self.scroller.is_settled(),
            hero,
            about,
            showcase,
            gallery,
            schedule,
            footer: self.footer_present.then_some(FooterFrame {}),
        }
    }
}

/// Mount-time hero fade-ins: nav pill from above, then subtitle, tagline and
/// CTA row from below, on the original's fixed delays.
fn hero_intro_cues() -> Vec<EntranceCue> {
    let rise = |index: usize, delay_secs: f64| EntranceCue {
        index,
        delay_secs,
        from_offset: Vec2::new(0.0, 30.0),
        from_opacity: 0.0,
        from_scale: 1.0,
        duration_secs: 0.8,
        ease: Ease::OutCubic,
    };
    vec![
        EntranceCue {
            index: 0,
            delay_secs: 0.3,
            from_offset: Vec2::new(0.0, -100.0),
            from_opacity: 0.0,
            from_scale: 1.0,
            duration_secs: 0.8,
            ease: Ease::OutCubic,
        },
        rise(1, 1.5),
        rise(2, 1.8),
        rise(3, 2.1),
    ]
}
