use tiergrid_core::{Canvas, TemplateKind};
use tiergrid_layout::create_layout;
use tiergrid_testkit::{assert_band_membership, assert_slots_disjoint, assert_slots_within_canvas};

#[test]
fn both_templates_generate_well_formed_layouts() {
    let grid = create_layout(None, TemplateKind::Default, Canvas::default());
    assert_eq!(grid.size, 12);
    assert_slots_within_canvas(&grid);
    assert_slots_disjoint(&grid);

    let tier = create_layout(None, TemplateKind::TierList, Canvas::default());
    assert_eq!(tier.categories().len(), 4);
    assert_slots_within_canvas(&tier);
    assert_slots_disjoint(&tier);
    assert_band_membership(&tier);
}
