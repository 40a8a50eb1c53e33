// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Suggested subcategories per category.
//!
//! Clients offer these in pickers. Subcategories are not checked against
//! this list when items are stored, since older records use free text.

use crate::types::Category;

/// Returns the suggested subcategories for a category, in display order.
#[must_use]
pub const fn suggested_subcategories(category: Category) -> &'static [&'static str] {
    match category {
        Category::Bedding => &[
            "duvet",
            "pillow",
            "sheets",
            "duvet_cover",
            "blanket",
            "mattress_topper",
        ],
        Category::Bathroom => &["towel", "bath_mat", "shower_curtain", "storage", "mirror"],
        Category::Decoration => &["lamp", "plant", "poster", "rug", "curtains", "candle_holder"],
        Category::OtherRoomInventory => &[
            "chair",
            "desk",
            "shelf",
            "clothes_hanger",
            "laundry_basket",
            "storage_box",
        ],
        Category::Kitchen => &[
            "plates",
            "glasses",
            "cutlery",
            "pots_pans",
            "utensils",
            "small_appliance",
            "food_storage",
        ],
        Category::BikeSports => &["bike", "bike_lock", "helmet", "sports_gear", "outdoor"],
        Category::Electronics => &[
            "cables_chargers",
            "speaker",
            "headphones",
            "computer_accessories",
            "kitchen_appliance",
            "extension_cord",
        ],
        Category::Other => &["books", "games", "office_supplies", "clothing", "miscellaneous"],
    }
}

/// Returns whether a subcategory is one of the suggestions for its category.
///
/// Comparison ignores case and surrounding whitespace.
#[must_use]
pub fn is_suggested_subcategory(category: Category, subcategory: &str) -> bool {
    let needle: String = subcategory.trim().to_lowercase();
    suggested_subcategories(category)
        .iter()
        .any(|candidate| *candidate == needle)
}
