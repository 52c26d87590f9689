//! Configurable loading indicator.
//!
//! A loader is one of six variants (spinner, pulse, dots, ring, progress,
//! wave) rendered at a size, in a palette colour, optionally with a caption
//! and optionally as a full-viewport overlay. Every option parses leniently:
//! unknown values fall back to the default.

use core::time::Duration;

use leptos::prelude::*;

use crate::interval::{next_dot, next_progress, use_interval};

const DOT_PERIOD: Duration = Duration::from_millis(300);
const PROGRESS_PERIOD: Duration = Duration::from_millis(100);
const WAVE_BARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl LoaderSize {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "small" => Self::Small,
            "large" => Self::Large,
            "xlarge" => Self::XLarge,
            _ => Self::Medium,
        }
    }

    #[must_use]
    pub const fn box_class(self) -> &'static str {
        match self {
            Self::Small => "w-8 h-8",
            Self::Medium => "w-16 h-16",
            Self::Large => "w-24 h-24",
            Self::XLarge => "w-32 h-32",
        }
    }

    /// Width only, for the spinner's highlight line.
    #[must_use]
    pub const fn width_class(self) -> &'static str {
        match self {
            Self::Small => "w-8",
            Self::Medium => "w-16",
            Self::Large => "w-24",
            Self::XLarge => "w-32",
        }
    }

    #[must_use]
    pub const fn dot_class(self) -> &'static str {
        match self {
            Self::Small => "w-2 h-2",
            Self::Medium => "w-3 h-3",
            Self::Large => "w-4 h-4",
            Self::XLarge => "w-5 h-5",
        }
    }

    #[must_use]
    pub const fn bar_class(self) -> &'static str {
        match self {
            Self::Small => "w-1 h-4",
            Self::Medium => "w-2 h-8",
            Self::Large => "w-3 h-12",
            Self::XLarge => "w-4 h-16",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderVariant {
    #[default]
    Spinner,
    Pulse,
    Dots,
    Ring,
    Progress,
    Wave,
}

impl LoaderVariant {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "pulse" => Self::Pulse,
            "dots" => Self::Dots,
            "ring" => Self::Ring,
            "progress" => Self::Progress,
            "wave" => Self::Wave,
            _ => Self::Spinner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderColor {
    #[default]
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    White,
    Dark,
}

impl LoaderColor {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "secondary" => Self::Secondary,
            "accent" => Self::Accent,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "white" => Self::White,
            "dark" => Self::Dark,
            _ => Self::Primary,
        }
    }

    #[must_use]
    pub const fn border_class(self) -> &'static str {
        match self {
            Self::Primary => "border-t-blue-600 border-r-blue-600/30",
            Self::Secondary => "border-t-purple-600 border-r-purple-600/30",
            Self::Accent => "border-t-pink-600 border-r-pink-600/30",
            Self::Success => "border-t-emerald-600 border-r-emerald-600/30",
            Self::Warning => "border-t-amber-600 border-r-amber-600/30",
            Self::White => "border-t-white border-r-white/30",
            Self::Dark => "border-t-gray-900 border-r-gray-900/30",
        }
    }

    /// Lighter inner ring of the ring variant.
    #[must_use]
    pub const fn inner_ring_class(self) -> &'static str {
        match self {
            Self::Primary => "border-t-blue-400 border-r-blue-400/20",
            Self::Secondary => "border-t-purple-400 border-r-purple-400/20",
            Self::Accent => "border-t-pink-400 border-r-pink-400/20",
            Self::Success => "border-t-emerald-400 border-r-emerald-400/20",
            Self::Warning => "border-t-amber-400 border-r-amber-400/20",
            Self::White => "border-t-white/50 border-r-white/10",
            Self::Dark => "border-t-gray-400 border-r-gray-400/20",
        }
    }

    #[must_use]
    pub const fn fill_class(self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-600",
            Self::Secondary => "bg-purple-600",
            Self::Accent => "bg-pink-600",
            Self::Success => "bg-emerald-600",
            Self::Warning => "bg-amber-600",
            Self::White => "bg-white",
            Self::Dark => "bg-gray-900",
        }
    }

    /// Horizontal gradient of the progress bar. White and dark have none of
    /// their own and use primary.
    #[must_use]
    pub const fn progress_class(self) -> &'static str {
        match self {
            Self::Secondary => "bg-gradient-to-r from-purple-500 to-purple-600",
            Self::Accent => "bg-gradient-to-r from-pink-500 to-pink-600",
            Self::Success => "bg-gradient-to-r from-emerald-500 to-emerald-600",
            Self::Warning => "bg-gradient-to-r from-amber-500 to-amber-600",
            Self::Primary | Self::White | Self::Dark => "bg-gradient-to-r from-blue-500 to-blue-600",
        }
    }

    #[must_use]
    pub const fn wave_class(self) -> &'static str {
        match self {
            Self::Secondary => "bg-gradient-to-t from-purple-500 to-purple-600",
            Self::Accent => "bg-gradient-to-t from-pink-500 to-pink-600",
            Self::Success => "bg-gradient-to-t from-emerald-500 to-emerald-600",
            Self::Warning => "bg-gradient-to-t from-amber-500 to-amber-600",
            Self::Primary | Self::White | Self::Dark => "bg-gradient-to-t from-blue-500 to-blue-600",
        }
    }

    #[must_use]
    pub const fn text_class(self) -> &'static str {
        match self {
            Self::Primary => "text-blue-600",
            Self::Secondary => "text-purple-600",
            Self::Accent => "text-pink-600",
            Self::Success => "text-emerald-600",
            Self::Warning => "text-amber-600",
            Self::White => "text-white",
            Self::Dark => "text-gray-900 dark:text-white",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
    Faster,
}

impl LoaderSpeed {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "slow" => Self::Slow,
            "fast" => Self::Fast,
            "faster" => Self::Faster,
            _ => Self::Normal,
        }
    }

    #[must_use]
    pub const fn spin_class(self) -> &'static str {
        match self {
            Self::Slow => "animate-[spin_1.5s_linear_infinite]",
            Self::Normal => "animate-[spin_1s_linear_infinite]",
            Self::Fast => "animate-[spin_0.5s_linear_infinite]",
            Self::Faster => "animate-[spin_0.3s_linear_infinite]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    pub size: LoaderSize,
    pub variant: LoaderVariant,
    pub color: LoaderColor,
    /// Caption below the indicator; `None` renders no caption region.
    pub text: Option<String>,
    pub full_screen: bool,
    pub speed: LoaderSpeed,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            size: LoaderSize::default(),
            variant: LoaderVariant::default(),
            color: LoaderColor::default(),
            text: Some("Loading...".to_owned()),
            full_screen: false,
            speed: LoaderSpeed::default(),
        }
    }
}

impl LoaderOptions {
    #[must_use]
    pub fn variant(mut self, variant: LoaderVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: LoaderSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn color(mut self, color: LoaderColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn speed(mut self, speed: LoaderSpeed) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn text(mut self, text: Option<impl Into<String>>) -> Self {
        self.text = text.map(Into::into);
        self
    }

    #[must_use]
    pub fn full_screen(mut self, full_screen: bool) -> Self {
        self.full_screen = full_screen;
        self
    }

    #[must_use]
    pub const fn container_class(&self) -> &'static str {
        if self.full_screen {
            "fixed inset-0 z-50 flex flex-col justify-center items-center bg-white/95 dark:bg-gray-900/95 backdrop-blur-sm"
        } else {
            "w-full h-full flex flex-col justify-center items-center"
        }
    }

    /// Whether the "Please wait..." line is shown under the caption.
    #[must_use]
    pub fn shows_wait_hint(&self) -> bool {
        self.text.is_some() && self.variant == LoaderVariant::Progress
    }
}

/// Renders a loading indicator.
pub fn component(options: LoaderOptions) -> impl IntoView {
    let LoaderOptions {
        size,
        variant,
        color,
        speed,
        ..
    } = options;
    let indicator = match variant {
        LoaderVariant::Spinner => spinner(size, color, speed).into_any(),
        LoaderVariant::Pulse => pulse(size, color).into_any(),
        LoaderVariant::Dots => dots(size, color).into_any(),
        LoaderVariant::Ring => ring(size, color, speed).into_any(),
        LoaderVariant::Progress => progress(color).into_any(),
        LoaderVariant::Wave => wave(size, color).into_any(),
    };
    let wait_hint = options.shows_wait_hint();
    let caption = options.text.clone().map(|text| {
        view! {
            <div class="mt-6 text-center">
                <p class=format!("font-medium {}", color.text_class())>{text}</p>
                {wait_hint
                    .then(|| {
                        view! {
                            <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">"Please wait..."</p>
                        }
                    })}
            </div>
        }
    });
    let pattern = options.full_screen.then(|| {
        view! {
            <div class="absolute inset-0 -z-10 opacity-5">
                <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-blue-500 rounded-full blur-3xl"></div>
                <div class="absolute right-1/4 bottom-1/4 w-64 h-64 bg-purple-500 rounded-full blur-3xl"></div>
            </div>
        }
    });

    view! {
        <div class=options.container_class() role="status" aria-live="polite">
            <div class="transition-all duration-300 transform hover:scale-105">{indicator}</div>
            {caption}
            {pattern}
        </div>
    }
}

fn spinner(size: LoaderSize, color: LoaderColor, speed: LoaderSpeed) -> impl IntoView {
    view! {
        <div class="relative">
            <div class=format!(
                "{} rounded-full border-4 {} {}",
                size.box_class(),
                color.border_class(),
                speed.spin_class(),
            )></div>
            <div class="flex absolute inset-0 justify-center items-center">
                <div class=format!(
                    "{} h-[1px] bg-gradient-to-r from-transparent via-current to-transparent",
                    size.width_class(),
                )></div>
            </div>
        </div>
    }
}

fn pulse(size: LoaderSize, color: LoaderColor) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center space-x-2">
            <div class=format!(
                "{} {} rounded-full animate-pulse",
                size.box_class(),
                color.fill_class(),
            )></div>
        </div>
    }
}

fn dots(size: LoaderSize, color: LoaderColor) -> impl IntoView {
    let active = RwSignal::new(0_usize);
    use_interval(DOT_PERIOD, move || active.update(|dot| *dot = next_dot(*dot)));

    view! {
        <div class="flex justify-center items-center space-x-2">
            {(0..3_usize)
                .map(|index| {
                    view! {
                        <div class=move || {
                            let emphasis = if active.get() == index {
                                "opacity-100 scale-125"
                            } else {
                                "opacity-40 scale-100"
                            };
                            format!(
                                "{} rounded-full {} transition-all duration-300 {emphasis}",
                                size.dot_class(),
                                color.fill_class(),
                            )
                        }></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn ring(size: LoaderSize, color: LoaderColor, speed: LoaderSpeed) -> impl IntoView {
    view! {
        <div class="relative">
            <div class=format!(
                "{} rounded-full border-4 {} {}",
                size.box_class(),
                color.border_class(),
                speed.spin_class(),
            )></div>
            <div class=format!(
                "{} rounded-full border-4 absolute top-0 left-0 border-l-transparent border-b-transparent {} {}",
                size.box_class(),
                speed.spin_class(),
                color.inner_ring_class(),
            )></div>
        </div>
    }
}

fn progress(color: LoaderColor) -> impl IntoView {
    let percent = RwSignal::new(0_u8);
    use_interval(PROGRESS_PERIOD, move || percent.update(|p| *p = next_progress(*p)));

    view! {
        <div class="w-48">
            <div
                class="overflow-hidden w-full h-2 bg-gray-200 rounded-full dark:bg-gray-700"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || percent.get().to_string()
            >
                <div
                    class=format!("h-full rounded-full transition-all duration-300 {}", color.progress_class())
                    style=move || format!("width: {}%", percent.get())
                ></div>
            </div>
        </div>
    }
}

fn wave(size: LoaderSize, color: LoaderColor) -> impl IntoView {
    view! {
        <div class="flex justify-center items-end space-x-1">
            {(0..WAVE_BARS)
                .map(|bar| {
                    view! {
                        <div
                            class=format!(
                                "{} rounded-full {} animate-wave",
                                size.bar_class(),
                                color.wave_class(),
                            )
                            style=format!(
                                "animation-delay: {:.1}s; animation-duration: 1s",
                                f64::from(bar) * 0.1,
                            )
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        assert_eq!(LoaderVariant::parse("sparkle"), LoaderVariant::Spinner);
        assert_eq!(LoaderVariant::parse(""), LoaderVariant::default());
        assert_eq!(LoaderSize::parse("huge"), LoaderSize::Medium);
        assert_eq!(LoaderColor::parse("blue-500"), LoaderColor::Primary);
        assert_eq!(LoaderSpeed::parse("ludicrous"), LoaderSpeed::Normal);
    }

    #[test]
    fn known_values_parse() {
        assert_eq!(LoaderVariant::parse("wave"), LoaderVariant::Wave);
        assert_eq!(LoaderVariant::parse("progress"), LoaderVariant::Progress);
        assert_eq!(LoaderSize::parse("xlarge"), LoaderSize::XLarge);
        assert_eq!(LoaderColor::parse("dark"), LoaderColor::Dark);
        assert_eq!(LoaderSpeed::parse("faster"), LoaderSpeed::Faster);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!(LoaderVariant::parse("Dots"), LoaderVariant::Spinner);
    }

    #[test]
    fn class_tables() {
        assert_eq!(LoaderSize::Large.box_class(), "w-24 h-24");
        assert_eq!(LoaderSize::Small.bar_class(), "w-1 h-4");
        assert_eq!(LoaderColor::White.progress_class(), LoaderColor::Primary.progress_class());
        assert_eq!(LoaderColor::Success.text_class(), "text-emerald-600");
        assert_eq!(LoaderSpeed::Fast.spin_class(), "animate-[spin_0.5s_linear_infinite]");
    }

    #[test]
    fn default_options() {
        let options = LoaderOptions::default();
        assert_eq!(options.variant, LoaderVariant::Spinner);
        assert_eq!(options.text.as_deref(), Some("Loading..."));
        assert!(!options.full_screen);
        assert!(options.container_class().starts_with("w-full"));
    }

    #[test]
    fn wait_hint_needs_caption_and_progress() {
        let progress = LoaderOptions::default().variant(LoaderVariant::Progress);
        assert!(progress.shows_wait_hint());
        assert!(!progress.clone().text(None::<String>).shows_wait_hint());
        assert!(!LoaderOptions::default().shows_wait_hint());
    }

    #[test]
    fn full_screen_overlay() {
        let options = LoaderOptions::default().full_screen(true);
        assert!(options.container_class().starts_with("fixed inset-0 z-50"));
    }
}
