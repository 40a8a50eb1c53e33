// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Category, is_suggested_subcategory, suggested_subcategories};

#[test]
fn test_every_category_has_suggestions() {
    for category in Category::ALL {
        assert!(!suggested_subcategories(category).is_empty());
    }
}

#[test]
fn test_suggestions_keep_display_order() {
    assert_eq!(suggested_subcategories(Category::Bedding)[0], "duvet");
    assert_eq!(suggested_subcategories(Category::Kitchen)[0], "plates");
}

#[test]
fn test_suggestion_lookup_ignores_case_and_whitespace() {
    assert!(is_suggested_subcategory(Category::BikeSports, "  Helmet "));
    assert!(!is_suggested_subcategory(Category::BikeSports, "duvet"));
}
