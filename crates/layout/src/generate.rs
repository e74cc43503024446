//! Deterministic slot and band geometry for new layouts.

use chrono::Utc;

use tiergrid_core::{new_id, Canvas, Category, Layout, Slot, TemplateKind};

use crate::template::{
    estimated_title_width, tier_color, tier_title, DEFAULT_BACKGROUND, DEFAULT_GRID_NAME,
    DEFAULT_TIER_NAME, GRID_COLS, GRID_INNER_GAP, GRID_OUTER_MARGIN_X, GRID_OUTER_MARGIN_Y,
    GRID_ROWS, TIER_COUNT, TIER_HEADER_HEIGHT, TIER_ICON_ALLOWANCE, TIER_LEFT_PADDING,
    TIER_MAX_SLOTS_PER_ROW, TIER_SLOT_SIDE, TIER_SLOT_SPACING, TIER_SLOT_START_GAP, TIER_SPACING,
    TIER_TITLE_FONT_SIZE, TIER_TITLE_GAP, TIER_TOP_PADDING,
};

/// Generate a complete layout for the given template kind and canvas.
///
/// Invoked once at creation time; the result is the immutable starting
/// structure that the mutation operations transform afterward. `size` on
/// the returned layout is the number of slots actually emitted, which for
/// tier lists can be less than bands times seven when a band's row runs out
/// of horizontal room.
pub fn create_layout(name: Option<&str>, kind: TemplateKind, canvas: Canvas) -> Layout {
    let (name, slots, categories) = match kind {
        TemplateKind::Default => {
            let name = name.unwrap_or(DEFAULT_GRID_NAME).to_string();
            (name, grid_slots(canvas), None)
        }
        TemplateKind::TierList => {
            let name = name.unwrap_or(DEFAULT_TIER_NAME).to_string();
            let (categories, slots) = tier_bands(canvas, TIER_COUNT);
            (name, slots, Some(categories))
        }
    };

    let now = Utc::now();
    Layout {
        id: new_id(),
        name,
        size: slots.len(),
        width: canvas.width,
        height: canvas.height,
        background_color: DEFAULT_BACKGROUND.to_string(),
        background_image: None,
        slots,
        categories,
        template_kind: kind,
        created_at: now,
        updated_at: now,
    }
}

/// Uniform grid: `GRID_COLS` x `GRID_ROWS` squares, row-major.
///
/// The side length is the smaller of the per-column and per-row budgets so
/// slots stay square without overflowing either axis, and the resulting
/// block is centered inside the margin-reduced canvas area on both axes.
fn grid_slots(canvas: Canvas) -> Vec<Slot> {
    let cols = GRID_COLS as f64;
    let rows = GRID_ROWS as f64;

    let effective_width = canvas.width - 2.0 * GRID_OUTER_MARGIN_X;
    let effective_height = canvas.height - 2.0 * GRID_OUTER_MARGIN_Y;

    let available_width = effective_width - GRID_INNER_GAP * (cols - 1.0);
    let available_height = effective_height - GRID_INNER_GAP * (rows - 1.0);

    let side = (available_width / cols).min(available_height / rows);

    let content_width = cols * side + (cols - 1.0) * GRID_INNER_GAP;
    let content_height = rows * side + (rows - 1.0) * GRID_INNER_GAP;

    let start_x = GRID_OUTER_MARGIN_X + (effective_width - content_width) / 2.0;
    let start_y = GRID_OUTER_MARGIN_Y + (effective_height - content_height) / 2.0;

    let mut slots = Vec::with_capacity(GRID_COLS * GRID_ROWS);
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let x = start_x + col as f64 * (side + GRID_INNER_GAP);
            let y = start_y + row as f64 * (side + GRID_INNER_GAP);
            slots.push(Slot::at(x, y, side));
        }
    }
    slots
}

/// Tier list: `count` labeled bands with a row of square slots each.
///
/// The canvas height left after the top padding, headers and inter-band
/// spacing is split evenly across the bands' content sub-bands. Slots start
/// after the estimated label width and are vertically centered in the
/// content sub-band; a slot is emitted only if its right edge stays inside
/// the right padding reserve, so a row that runs out of room silently drops
/// its tail instead of wrapping or clipping.
pub fn tier_bands(canvas: Canvas, count: usize) -> (Vec<Category>, Vec<Slot>) {
    let count_f = count as f64;
    let content_height = (canvas.height
        - TIER_TOP_PADDING
        - count_f * TIER_HEADER_HEIGHT
        - (count_f - 1.0) * TIER_SPACING)
        / count_f;

    let title_x = TIER_LEFT_PADDING + TIER_ICON_ALLOWANCE + TIER_TITLE_GAP;

    let mut categories = Vec::with_capacity(count);
    let mut slots = Vec::new();

    for index in 0..count {
        let title = tier_title(index);
        let y_position =
            TIER_TOP_PADDING + index as f64 * (TIER_HEADER_HEIGHT + content_height + TIER_SPACING);

        let category = Category {
            id: new_id(),
            title: title.clone(),
            y_position,
            height: TIER_HEADER_HEIGHT + content_height,
            background_color: tier_color(index).to_string(),
            text_color: "#ffffff".to_string(),
            font_size: TIER_TITLE_FONT_SIZE,
            icon_url: None,
        };

        let start_x = title_x
            + estimated_title_width(&title, TIER_TITLE_FONT_SIZE)
            + TIER_SLOT_START_GAP;
        let available = (canvas.width - start_x - TIER_LEFT_PADDING).max(0.0);
        let per_row = (available / (TIER_SLOT_SIDE + TIER_SLOT_SPACING)).floor() as usize;
        let planned = per_row.min(TIER_MAX_SLOTS_PER_ROW);

        let content_top = y_position + TIER_HEADER_HEIGHT;
        let slot_y = content_top + (content_height - TIER_SLOT_SIDE) / 2.0;

        for j in 0..planned {
            let slot_x = start_x + j as f64 * (TIER_SLOT_SIDE + TIER_SLOT_SPACING);
            // Partial overflow slots are dropped, not wrapped to a new line.
            if slot_x + TIER_SLOT_SIDE <= canvas.width - TIER_LEFT_PADDING {
                let mut slot = Slot::at(slot_x, slot_y, TIER_SLOT_SIDE);
                slot.category_id = Some(category.id.clone());
                slots.push(slot);
            }
        }

        categories.push(category);
    }

    (categories, slots)
}
