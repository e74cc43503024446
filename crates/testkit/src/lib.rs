#![warn(missing_docs)]
//! Shared fixtures and invariant checks for workspace tests.

use tiergrid_core::{Layout, User};

/// Build a plausible directory user for tests.
pub fn sample_user(screen_name: &str) -> User {
    User {
        profile_image_url: format!("https://pbs.example/{screen_name}.jpg"),
        screen_name: screen_name.to_string(),
        url: format!("https://x.example/{screen_name}"),
        followers_count: 1_234,
        friends_count: 321,
        created_at: "Mon Nov 29 21:18:15 +0000 2010".to_string(),
        description: format!("{screen_name} writes software"),
    }
}

/// Build `count` distinct sample users with varied follower counts.
pub fn sample_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| {
            let mut user = sample_user(&format!("user{i}"));
            user.followers_count = (i as u64 + 1) * 100;
            user
        })
        .collect()
}

/// Assert every slot lies fully inside the layout's canvas bounds.
///
/// Panics with the offending slot id on violation.
pub fn assert_slots_within_canvas(layout: &Layout) {
    for slot in &layout.slots {
        assert!(
            slot.x >= 0.0
                && slot.y >= 0.0
                && slot.right() <= layout.width
                && slot.bottom() <= layout.height,
            "slot {} escapes the canvas: ({}, {}) {}x{}",
            slot.id,
            slot.x,
            slot.y,
            slot.width,
            slot.height
        );
    }
}

/// Assert no two slots in the layout overlap.
pub fn assert_slots_disjoint(layout: &Layout) {
    for (i, a) in layout.slots.iter().enumerate() {
        for b in layout.slots.iter().skip(i + 1) {
            assert!(!a.overlaps(b), "slots {} and {} overlap", a.id, b.id);
        }
    }
}

/// Assert every slot's category reference resolves and the slot sits inside
/// its band's vertical span.
pub fn assert_band_membership(layout: &Layout) {
    for slot in &layout.slots {
        let Some(id) = slot.category_id.as_deref() else {
            continue;
        };
        let category = layout
            .category(id)
            .unwrap_or_else(|| panic!("slot {} references unknown band {id}", slot.id));
        assert!(
            slot.y >= category.y_position && slot.bottom() <= category.bottom(),
            "slot {} sits outside band {}",
            slot.id,
            category.id
        );
    }
}
