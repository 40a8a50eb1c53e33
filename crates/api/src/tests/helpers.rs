// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use loppis_domain::{Actor, Item, ItemId, ItemPatch, Role};
use loppis_persistence::{ItemRepository, Persistence, PersistenceError};

use crate::{DonationRequest, ItemDraftRequest, ItemResponse, PublicBucket, submit_donation};

pub fn create_test_admin() -> Actor {
    Actor::new(
        String::from("admin-1"),
        Role::Admin,
        String::from("Ada Admin"),
    )
}

pub fn create_test_donor() -> Actor {
    Actor::new(
        String::from("donor-1"),
        Role::Donor,
        String::from("Dana Donor"),
    )
}

pub fn create_test_buyer() -> Actor {
    Actor::new(String::from("buyer-1"), Role::Buyer, String::from("Bo Buyer"))
}

pub fn create_test_bucket() -> PublicBucket {
    PublicBucket::new("https://photos.example.com/item-photos/")
}

pub fn setup_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_draft_request(name: &str, quantity: i64, original_price: f64) -> ItemDraftRequest {
    ItemDraftRequest {
        name: name.to_string(),
        description: None,
        category: String::from("kitchen"),
        subcategory: String::from("plates"),
        condition: String::from("lightly_used"),
        quantity,
        original_price,
        suggested_price: None,
        location: Some(String::from("Shelf B")),
        donor_name: None,
    }
}

/// Submits one item as the given actor and returns the stored record.
pub fn donate_one<R>(repo: &mut R, actor: &Actor, name: &str, quantity: i64) -> ItemResponse
where
    R: ItemRepository + ?Sized,
{
    let request = DonationRequest {
        items: vec![create_draft_request(name, quantity, 100.0)],
    };
    let mut response =
        submit_donation(repo, actor, request, &create_test_bucket()).expect("Donation failed");
    response.items.remove(0)
}

fn injected() -> PersistenceError {
    PersistenceError::StorageUnavailable(String::from("injected failure"))
}

/// Repository wrapper that fails selected calls with `StorageUnavailable`.
pub struct FlakyRepository {
    pub inner: Persistence,
    pub fail_list: bool,
    /// Number of creates that succeed before every further create fails.
    pub creates_before_failure: Option<usize>,
    pub fail_update: bool,
    pub fail_delete: bool,
    creates: usize,
}

impl FlakyRepository {
    pub fn new(inner: Persistence) -> Self {
        Self {
            inner,
            fail_list: false,
            creates_before_failure: None,
            fail_update: false,
            fail_delete: false,
            creates: 0,
        }
    }
}

impl ItemRepository for FlakyRepository {
    fn list(&mut self) -> Result<Vec<Item>, PersistenceError> {
        if self.fail_list {
            return Err(injected());
        }
        self.inner.list()
    }

    fn get(&mut self, id: &ItemId) -> Result<Option<Item>, PersistenceError> {
        self.inner.get(id)
    }

    fn create(&mut self, item: &Item) -> Result<Item, PersistenceError> {
        if self
            .creates_before_failure
            .is_some_and(|limit| self.creates >= limit)
        {
            return Err(injected());
        }
        self.creates += 1;
        self.inner.create(item)
    }

    fn update(&mut self, id: &ItemId, patch: &ItemPatch) -> Result<Item, PersistenceError> {
        if self.fail_update {
            return Err(injected());
        }
        self.inner.update(id, patch)
    }

    fn delete(&mut self, id: &ItemId) -> Result<(), PersistenceError> {
        if self.fail_delete {
            return Err(injected());
        }
        self.inner.delete(id)
    }
}
