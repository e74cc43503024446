//! Paint-ordered scene composition for a layout.

use serde::{Deserialize, Serialize};

use tiergrid_core::{Layout, Slot, TextPosition};

/// Band labels sit this far in from the left canvas edge.
const BAND_LABEL_X: f64 = 20.0;
/// Band labels sit this far below the band's top edge.
const BAND_LABEL_Y: f64 = 20.0;
/// Slot labels never shrink below this size.
const MIN_LABEL_SIZE: f64 = 6.0;
/// Description lines are cut at this many characters.
const DESCRIPTION_CUT: usize = 50;

/// Drop shadow parameters attached to a fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Blur radius in pixels.
    pub blur: f64,
    /// Shadow color.
    pub color: String,
    /// Horizontal offset in pixels.
    pub offset_x: f64,
    /// Vertical offset in pixels.
    pub offset_y: f64,
}

/// Horizontal text alignment within the op's wrap width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left-aligned.
    Left,
    /// Centered.
    Center,
}

/// One drawing instruction for a [`crate::Surface`].
///
/// Colors and gradient specs are opaque strings passed through to the
/// backend untouched. Coordinates are canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Filled rectangle.
    FillRect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Fill color or gradient spec.
        color: String,
        /// Corner radius.
        corner_radius: f64,
        /// Opacity in `0..=1`.
        opacity: f64,
        /// Rotation in degrees around the top-left corner.
        rotation: f64,
        /// Optional drop shadow.
        #[serde(skip_serializing_if = "Option::is_none")]
        shadow: Option<Shadow>,
    },
    /// Stroked rectangle outline.
    StrokeRect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Stroke color.
        color: String,
        /// Stroke width.
        stroke_width: f64,
        /// Corner radius.
        corner_radius: f64,
        /// Rotation in degrees around the top-left corner.
        rotation: f64,
    },
    /// Raster image referenced by URL.
    Image {
        /// Source URL.
        url: String,
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Corner radius used to clip the image.
        corner_radius: f64,
        /// Rotation in degrees around the top-left corner.
        rotation: f64,
    },
    /// Text run.
    Text {
        /// The string to draw.
        text: String,
        /// Left edge of the wrap box.
        x: f64,
        /// Top edge of the text line.
        y: f64,
        /// Wrap box width.
        width: f64,
        /// Font size in pixels.
        size: f64,
        /// Text color.
        color: String,
        /// Alignment inside the wrap box.
        align: TextAlign,
        /// Whether the run is drawn bold.
        bold: bool,
    },
}

/// Raster format for an export request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Portable Network Graphics.
    #[default]
    Png,
    /// JPEG.
    Jpg,
    /// Scalable Vector Graphics.
    Svg,
    /// Portable Document Format.
    Pdf,
}

/// Parameters for exporting the rendered surface to an image.
///
/// Exports always target the layout's full canvas resolution regardless of
/// any on-screen display scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Output format.
    pub format: ExportFormat,
    /// Encoder quality in `0..=1` where applicable.
    pub quality: f64,
    /// Output width in pixels.
    pub width: f64,
    /// Output height in pixels.
    pub height: f64,
    /// Pixel ratio multiplier.
    pub scale: f64,
    /// Whether the background is drawn.
    pub include_background: bool,
    /// Whether the background is forced transparent.
    pub transparent_background: bool,
}

impl ExportOptions {
    /// Options matching a layout's own canvas, full quality.
    pub fn for_layout(layout: &Layout) -> Self {
        Self {
            format: ExportFormat::Png,
            quality: 1.0,
            width: layout.width,
            height: layout.height,
            scale: 1.0,
            include_background: true,
            transparent_background: false,
        }
    }

    /// Download file name for an export of `layout`.
    pub fn file_name(&self, layout: &Layout) -> String {
        let name = if layout.name.is_empty() {
            "grid"
        } else {
            layout.name.as_str()
        };
        format!(
            "{name}-{}x{}.{}",
            self.width as u64,
            self.height as u64,
            match self.format {
                ExportFormat::Png => "png",
                ExportFormat::Jpg => "jpg",
                ExportFormat::Svg => "svg",
                ExportFormat::Pdf => "pdf",
            }
        )
    }
}

/// A paint-ordered list of draw operations for one layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Operations in back-to-front order.
    pub ops: Vec<DrawOp>,
}

impl Scene {
    /// Compose the scene for `layout`: background, then category bands,
    /// then slots, in generation order within each group.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut ops = Vec::new();

        ops.push(DrawOp::FillRect {
            x: 0.0,
            y: 0.0,
            width: layout.width,
            height: layout.height,
            color: layout.background_color.clone(),
            corner_radius: 0.0,
            opacity: 1.0,
            rotation: 0.0,
            shadow: None,
        });
        if let Some(url) = &layout.background_image {
            ops.push(DrawOp::Image {
                url: url.clone(),
                x: 0.0,
                y: 0.0,
                width: layout.width,
                height: layout.height,
                corner_radius: 0.0,
                rotation: 0.0,
            });
        }

        for category in layout.categories() {
            ops.push(DrawOp::FillRect {
                x: 0.0,
                y: category.y_position,
                width: layout.width,
                height: category.height,
                color: category.background_color.clone(),
                corner_radius: 0.0,
                opacity: 1.0,
                rotation: 0.0,
                shadow: None,
            });
            ops.push(DrawOp::Text {
                text: category.title.clone(),
                x: BAND_LABEL_X,
                y: category.y_position + BAND_LABEL_Y,
                width: layout.width - 2.0 * BAND_LABEL_X,
                size: category.font_size,
                color: category.text_color.clone(),
                align: TextAlign::Left,
                bold: true,
            });
        }

        for slot in &layout.slots {
            compose_slot(&mut ops, slot);
        }

        Self {
            width: layout.width,
            height: layout.height,
            ops,
        }
    }
}

/// Anchor line for a slot's auxiliary text, in canvas coordinates.
fn text_anchor_y(slot: &Slot) -> f64 {
    slot.y
        + match slot.style.text_position {
            TextPosition::Top => -30.0,
            TextPosition::Bottom => slot.height + 10.0,
            TextPosition::Center => slot.height / 2.0,
            TextPosition::Overlay => slot.height - 30.0,
        }
}

fn slot_shadow(slot: &Slot) -> Option<Shadow> {
    let style = &slot.style;
    let has_shadow = style.shadow_blur != 0.0
        || style.shadow_offset_x != 0.0
        || style.shadow_offset_y != 0.0;
    has_shadow.then(|| Shadow {
        blur: style.shadow_blur,
        color: style.shadow_color.clone(),
        offset_x: style.shadow_offset_x,
        offset_y: style.shadow_offset_y,
    })
}

fn compose_slot(ops: &mut Vec<DrawOp>, slot: &Slot) {
    let style = &slot.style;

    ops.push(DrawOp::FillRect {
        x: slot.x,
        y: slot.y,
        width: slot.width,
        height: slot.height,
        color: style.background_color.clone(),
        corner_radius: style.border_radius,
        opacity: style.opacity,
        rotation: slot.rotation,
        shadow: slot_shadow(slot),
    });

    match &slot.user {
        Some(user) => {
            ops.push(DrawOp::Image {
                url: user.profile_image_url.clone(),
                x: slot.x,
                y: slot.y,
                width: slot.width,
                height: slot.height,
                corner_radius: style.border_radius,
                rotation: slot.rotation,
            });
        }
        None => {
            // Empty slots show a plus glyph instead of an avatar.
            ops.push(DrawOp::Text {
                text: "+".to_string(),
                x: slot.x,
                y: slot.y + slot.height / 2.0 - slot.width * 0.2,
                width: slot.width,
                size: slot.width * 0.4,
                color: "rgba(255, 255, 255, 0.4)".to_string(),
                align: TextAlign::Center,
                bold: false,
            });
        }
    }

    if style.border_width > 0.0 {
        ops.push(DrawOp::StrokeRect {
            x: slot.x,
            y: slot.y,
            width: slot.width,
            height: slot.height,
            color: style.border_color.clone(),
            stroke_width: style.border_width,
            corner_radius: style.border_radius,
            rotation: slot.rotation,
        });
    }

    let Some(user) = &slot.user else {
        return;
    };

    let anchor = text_anchor_y(slot);
    ops.push(DrawOp::Text {
        text: format!("@{}", user.screen_name),
        x: slot.x,
        y: anchor,
        width: slot.width,
        size: (slot.width / 10.0).max(MIN_LABEL_SIZE),
        color: style.text_color.clone(),
        align: TextAlign::Center,
        bold: true,
    });

    if style.show_followers {
        ops.push(DrawOp::Text {
            text: format!("{} followers", group_thousands(user.followers_count)),
            x: slot.x - 20.0,
            y: anchor + style.text_size + 5.0,
            width: slot.width + 40.0,
            size: style.text_size * 0.8,
            color: style.text_color.clone(),
            align: TextAlign::Center,
            bold: false,
        });
    }

    if style.show_description && !user.description.is_empty() {
        let offset = if style.show_followers { 25.0 } else { 15.0 };
        ops.push(DrawOp::Text {
            text: truncate_description(&user.description),
            x: slot.x - 20.0,
            y: anchor + style.text_size + offset,
            width: slot.width + 40.0,
            size: style.text_size * 0.7,
            color: style.text_color.clone(),
            align: TextAlign::Center,
            bold: false,
        });
    }
}

fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_CUT {
        return description.to_string();
    }
    let cut: String = description.chars().take(DESCRIPTION_CUT).collect();
    format!("{cut}...")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiergrid_core::{Canvas, TemplateKind};
    use tiergrid_layout::{assign_user, create_layout, update_slot, SlotPatch};
    use tiergrid_testkit::sample_user;

    #[test]
    fn background_paints_first_then_bands_then_slots() {
        let layout = create_layout(None, TemplateKind::TierList, Canvas::default());
        let scene = Scene::from_layout(&layout);

        assert!(matches!(
            &scene.ops[0],
            DrawOp::FillRect { width, color, .. }
                if *width == 1920.0 && color.starts_with("linear-gradient")
        ));
        // Four band fills, each followed by its label.
        let band_fills = scene.ops[1..9]
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
            .count();
        let band_labels = scene.ops[1..9]
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .count();
        assert_eq!(band_fills, 4);
        assert_eq!(band_labels, 4);
    }

    #[test]
    fn empty_slot_shows_a_plus_glyph_and_no_label() {
        let layout = create_layout(None, TemplateKind::Default, Canvas::default());
        let scene = Scene::from_layout(&layout);
        let plus_count = scene
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { text, .. } if text == "+"))
            .count();
        assert_eq!(plus_count, 12);
        assert!(!scene
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, .. } if text.starts_with('@'))));
    }

    #[test]
    fn occupied_slot_draws_avatar_and_handle() {
        let layout = create_layout(None, TemplateKind::Default, Canvas::default());
        let slot_id = layout.slots[0].id.clone();
        let layout = assign_user(layout, &slot_id, sample_user("ada"));
        let scene = Scene::from_layout(&layout);

        assert!(scene
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Image { url, .. } if url.contains("ada"))));
        assert!(scene
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, bold, .. } if text == "@ada" && *bold)));
    }

    #[test]
    fn follower_and_description_lines_follow_the_toggles() {
        let layout = create_layout(None, TemplateKind::Default, Canvas::default());
        let slot_id = layout.slots[0].id.clone();
        let mut user = sample_user("ada");
        user.followers_count = 1_234_567;
        let layout = assign_user(layout, &slot_id, user);

        let bare = Scene::from_layout(&layout);
        assert!(!bare
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, .. } if text.ends_with("followers"))));

        let patch = SlotPatch {
            show_followers: Some(true),
            show_description: Some(true),
            ..SlotPatch::default()
        };
        let layout = update_slot(layout, &slot_id, &patch);
        let full = Scene::from_layout(&layout);
        assert!(full
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, .. } if text == "1,234,567 followers")));
        assert!(full
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, .. } if text.contains("writes software"))));
    }

    #[test]
    fn text_anchor_tracks_the_position_field() {
        let layout = create_layout(None, TemplateKind::Default, Canvas::default());
        let slot = &layout.slots[0];

        let mut top = slot.clone();
        top.style.text_position = TextPosition::Top;
        assert_eq!(text_anchor_y(&top), slot.y - 30.0);

        let mut overlay = slot.clone();
        overlay.style.text_position = TextPosition::Overlay;
        assert_eq!(text_anchor_y(&overlay), slot.y + slot.height - 30.0);

        assert_eq!(text_anchor_y(slot), slot.y + slot.height + 10.0);
    }

    #[test]
    fn long_descriptions_are_cut_with_an_ellipsis() {
        assert_eq!(truncate_description("short"), "short");
        let long = "x".repeat(80);
        let cut = truncate_description(&long);
        assert_eq!(cut.chars().count(), 53);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn export_file_name_uses_name_and_resolution() {
        let layout = create_layout(Some("My Board"), TemplateKind::Default, Canvas::default());
        let options = ExportOptions::for_layout(&layout);
        assert_eq!(options.file_name(&layout), "My Board-1920x1080.png");
    }

    #[test]
    fn scene_serializes_with_tagged_ops() {
        let layout = create_layout(None, TemplateKind::Default, Canvas::default());
        let scene = Scene::from_layout(&layout);
        let json = serde_json::to_value(&scene).expect("scene serializes");
        assert_eq!(json["ops"][0]["op"], "fill_rect");
    }
}
