//! Static page content and the pure formatting helpers the HUD and gallery
//! render through. Everything here is deterministic given its inputs.

pub const BRAND: &str = "VANTA";
pub const MODEL: &str = "V-1";
pub const FIRMWARE_TAG: &str = "FW 2.4.1";

pub const MAP_EMBED_URL: &str =
    "https://www.openstreetmap.org/export/embed.html?bbox=139.7414%2C35.6528%2C139.7814%2C35.6928&layer=mapnik";

/// One gallery record. The list is fixed at build time and never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryImage {
    pub url: &'static str,
    pub title: &'static str,
    pub meta: &'static str,
    pub size: SizeClass,
    pub parallax: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    Standard,
    Wide,
    Tall,
}

pub const GALLERY_IMAGES: [GalleryImage; 6] = [
    GalleryImage {
        url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&q=80&w=1200",
        title: "Alpine Peak",
        meta: "F/8 · 1/640 · ISO 100",
        size: SizeClass::Wide,
        parallax: -60.0,
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1487621167305-5d248087c724?auto=format&fit=crop&q=80&w=1200",
        title: "Mist Valley",
        meta: "F/4 · 1/250 · ISO 200",
        size: SizeClass::Tall,
        parallax: 90.0,
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1439066615861-d1af74d74000?auto=format&fit=crop&q=80&w=1200",
        title: "Azure Lake",
        meta: "F/11 · 1/320 · ISO 100",
        size: SizeClass::Standard,
        parallax: -40.0,
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1495616811223-4d98c6e9c869?auto=format&fit=crop&q=80&w=1200",
        title: "Golden Hour",
        meta: "F/2.8 · 1/1000 · ISO 64",
        size: SizeClass::Wide,
        parallax: 70.0,
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1448375240586-882707db888b?auto=format&fit=crop&q=80&w=1200",
        title: "Deep Forest",
        meta: "F/5.6 · 1/125 · ISO 400",
        size: SizeClass::Tall,
        parallax: -85.0,
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1500382017468-9049fed747ef?auto=format&fit=crop&q=80&w=1200",
        title: "Open Field",
        meta: "F/16 · 1/200 · ISO 100",
        size: SizeClass::Standard,
        parallax: 55.0,
    },
];

/// Grid classes for one gallery card. Span follows the record's size tag,
/// the vertical drop alternates by index so the grid reads asymmetric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardLayout {
    pub span_class: &'static str,
    pub drop_class: &'static str,
}

pub fn card_layout(index: usize, size: SizeClass) -> CardLayout {
    let span_class = match size {
        SizeClass::Standard => "card-std",
        SizeClass::Wide => "card-wide",
        SizeClass::Tall => "card-tall",
    };
    let drop_class = if index % 2 == 1 { "card-drop" } else { "card-flush" };

    CardLayout {
        span_class,
        drop_class,
    }
}

/// Fixed-width HUD axis readout: negative values clamp to zero, values are
/// zero-padded to four digits and capped so the chrome never widens.
pub fn format_axis(value: i32) -> String {
    format!("{:04}", value.clamp(0, 9999))
}

pub fn format_clock(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Simulated per-card reference overlay. Pure in `draw` (one uniform sample
/// in [0,1)); the caller freezes a single draw per card.
pub fn frame_reference(draw: f64) -> String {
    let draw = draw.clamp(0.0, 1.0);
    let id = 1000 + (draw * 8999.0) as u32;
    let latitude = 12.0 + draw * 78.0;
    format!("REF_{id} / {latitude:.4}N")
}

/// Looping data-string motif: drift duration in seconds from one uniform
/// draw. The spread keeps neighbouring strings visibly out of phase.
pub fn drift_duration_secs(draw: f64) -> f64 {
    18.0 + draw.clamp(0.0, 1.0) * 14.0
}

/// Deterministic placement for the rotating-glyph motif, percent of the
/// viewport, derived from the instance index alone.
pub fn glyph_position(index: usize) -> (f64, f64) {
    let left = 8.0 + ((index * 23) % 78) as f64;
    let top = 12.0 + ((index * 31) % 64) as f64;
    (left, top)
}

pub const GLYPH_COUNT: usize = 4;
pub const RETICLE_COUNT: usize = 3;

pub const DATA_STRINGS: [&str; 5] = [
    "ISO 64—102400 · 14-BIT RAW · DUAL GAIN",
    "AF-C 493PT · EYE/TRACK · -6EV",
    "IBIS 8.0 STOPS · 1/8000 MECH",
    "UHS-II x2 · 10GBPS TETHER · WR SEALED",
    "8K/30 · 4K/120 · V-GAMUT LOG",
];

pub struct SpecRow {
    pub label: &'static str,
    pub value: &'static str,
}

pub const SPEC_ROWS: [SpecRow; 8] = [
    SpecRow { label: "SENSOR", value: "61MP full-frame BSI CMOS" },
    SpecRow { label: "MOUNT", value: "VX bayonet, 16mm flange" },
    SpecRow { label: "SHUTTER", value: "1/8000 mechanical · 1/32000 electronic" },
    SpecRow { label: "ISO", value: "64–102400 (ext. 32–409600)" },
    SpecRow { label: "STABILIZATION", value: "5-axis IBIS, 8.0 stops" },
    SpecRow { label: "VIDEO", value: "8K/30p · 4K/120p 10-bit" },
    SpecRow { label: "VIEWFINDER", value: "9.44M-dot OLED, 0.90x" },
    SpecRow { label: "BODY", value: "magnesium alloy, 687g, weather sealed" },
];

/// Copy blocks revealed under the hero stage, with their stagger slot.
pub const STAGE_COPY: [(&str, &str); 3] = [
    (
        "SEE IN THE DARK",
        "A dual-gain 61 megapixel sensor reads clean at six stops under \
         moonlight, so the frame you saw is the frame you keep.",
    ),
    (
        "HOLD THE MOMENT",
        "Eight stops of in-body stabilization and a 1/32000 silent shutter \
         bracket everything from long blue-hour exposures to wingbeats.",
    ),
    (
        "BUILT FOR WEATHER",
        "Sealed magnesium, locking dials, and a shutter rated past half a \
         million actuations. The V-1 goes where the light is.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_titles_in_fixed_order() {
        let titles: Vec<&str> = GALLERY_IMAGES.iter().map(|image| image.title).collect();
        assert_eq!(
            titles,
            vec![
                "Alpine Peak",
                "Mist Valley",
                "Azure Lake",
                "Golden Hour",
                "Deep Forest",
                "Open Field"
            ]
        );
    }

    #[test]
    fn gallery_urls_carry_fixed_query_parameters() {
        for image in &GALLERY_IMAGES {
            for parameter in ["auto=format", "fit=crop", "q=80", "w=1200"] {
                assert!(
                    image.url.contains(parameter),
                    "{} should pin {parameter}",
                    image.title
                );
            }
        }
    }

    #[test]
    fn card_layout_is_deterministic() {
        for (index, image) in GALLERY_IMAGES.iter().enumerate() {
            let first = card_layout(index, image.size);
            let second = card_layout(index, image.size);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn card_layout_alternates_drop_by_index() {
        assert_eq!(card_layout(0, SizeClass::Standard).drop_class, "card-flush");
        assert_eq!(card_layout(1, SizeClass::Standard).drop_class, "card-drop");
        assert_eq!(card_layout(2, SizeClass::Wide).drop_class, "card-flush");
    }

    #[test]
    fn card_layout_span_follows_size_tag() {
        assert_eq!(card_layout(0, SizeClass::Wide).span_class, "card-wide");
        assert_eq!(card_layout(0, SizeClass::Tall).span_class, "card-tall");
        assert_eq!(card_layout(0, SizeClass::Standard).span_class, "card-std");
    }

    #[test]
    fn axis_format_zero_pads_to_four_digits() {
        assert_eq!(format_axis(512), "0512");
        assert_eq!(format_axis(300), "0300");
        assert_eq!(format_axis(7), "0007");
    }

    #[test]
    fn axis_format_clamps_negative_to_zero_default() {
        assert_eq!(format_axis(-15), "0000");
        assert_eq!(format_axis(0), "0000");
    }

    #[test]
    fn axis_format_caps_overflow() {
        assert_eq!(format_axis(123_456), "9999");
    }

    #[test]
    fn clock_format_pads_components() {
        assert_eq!(format_clock(9, 5, 3), "09:05:03");
        assert_eq!(format_clock(23, 59, 59), "23:59:59");
    }

    #[test]
    fn frame_reference_is_pure_in_its_draw() {
        assert_eq!(frame_reference(0.25), frame_reference(0.25));
        assert_eq!(frame_reference(0.0), "REF_1000 / 12.0000N");
        assert!(frame_reference(0.999).starts_with("REF_9"));
    }

    #[test]
    fn drift_duration_stays_in_band() {
        assert_eq!(drift_duration_secs(0.0), 18.0);
        assert_eq!(drift_duration_secs(1.0), 32.0);
        assert!(drift_duration_secs(2.0) <= 32.0);
    }

    #[test]
    fn glyph_positions_are_distinct_and_on_screen() {
        let positions: Vec<(f64, f64)> = (0..GLYPH_COUNT).map(glyph_position).collect();
        for (left, top) in &positions {
            assert!((0.0..=100.0).contains(left));
            assert!((0.0..=100.0).contains(top));
        }
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                assert_ne!(positions[i], positions[j]);
            }
        }
    }
}
