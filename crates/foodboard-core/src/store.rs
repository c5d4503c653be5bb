use crate::food::{Food, FoodId};

/// Ordered in-memory collection of acknowledged food records.
///
/// `RecordStore` keeps records in insertion order and is conceptually keyed
/// by [`Food::id`]. It performs no sorting and no validation; the owner is
/// responsible for only inserting records returned by the remote collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    foods: Vec<Food>,
}

impl RecordStore {
    /// Creates an empty store.
    ///
    /// # Examples
    ///
    /// ```
    /// use foodboard_core::RecordStore;
    ///
    /// let store = RecordStore::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every record with `foods`, keeping their order.
    pub fn replace_all(&mut self, foods: Vec<Food>) {
        self.foods = foods;
    }

    /// Appends a record at the end.
    ///
    /// If a record with the same id is already stored it is replaced in
    /// place instead, so ids stay unique.
    pub fn append(&mut self, food: Food) {
        if !self.replace_by_id(food.clone()) {
            self.foods.push(food);
        }
    }

    /// Replaces the record whose id equals `food.id`, in place.
    ///
    /// Returns false if no record has that id. Other records and the relative
    /// order are left untouched.
    pub fn replace_by_id(&mut self, food: Food) -> bool {
        match self.foods.iter_mut().find(|f| f.id == food.id) {
            Some(slot) => {
                *slot = food;
                true
            }
            None => false,
        }
    }

    /// Removes the record with the given id.
    ///
    /// Removing an id that is not present is a no-op. Returns whether a
    /// record was removed.
    pub fn remove_by_id(&mut self, id: FoodId) -> bool {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != id);
        before != self.foods.len()
    }

    /// Looks up a record by id.
    pub fn find(&self, id: FoodId) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Returns the records in display order.
    pub fn as_slice(&self) -> &[Food] {
        &self.foods
    }

    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.foods.iter()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: FoodId, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            price: 10.0 + id as f64,
            available: true,
            image: format!("http://img/{id}"),
        }
    }

    #[test]
    fn test_replace_all_discards_previous() {
        let mut store = RecordStore::new();
        store.append(food(1, "x"));

        store.replace_all(vec![food(2, "y")]);

        assert_eq!(store.as_slice(), &[food(2, "y")]);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = RecordStore::new();
        store.append(food(3, "c"));
        store.append(food(1, "a"));
        store.append(food(2, "b"));

        let ids: Vec<FoodId> = store.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_append_existing_id_replaces_in_place() {
        let mut store = RecordStore::new();
        store.replace_all(vec![food(1, "a"), food(7, "g"), food(2, "b")]);

        let mut again = food(7, "g");
        again.price = 1.0;
        store.append(again.clone());

        let ids: Vec<FoodId> = store.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 7, 2]);
        assert_eq!(store.find(7), Some(&again));
    }

    #[test]
    fn test_replace_by_id_preserves_position() {
        let mut store = RecordStore::new();
        store.replace_all(vec![food(1, "a"), food(2, "b"), food(3, "c")]);

        let mut updated = food(2, "b");
        updated.name = "renamed".to_string();
        assert!(store.replace_by_id(updated.clone()));

        assert_eq!(store.len(), 3);
        assert_eq!(store.as_slice()[0], food(1, "a"));
        assert_eq!(store.as_slice()[1], updated);
        assert_eq!(store.as_slice()[2], food(3, "c"));
    }

    #[test]
    fn test_replace_unknown_id_changes_nothing() {
        let mut store = RecordStore::new();
        store.replace_all(vec![food(1, "a")]);

        assert!(!store.replace_by_id(food(9, "z")));
        assert_eq!(store.as_slice(), &[food(1, "a")]);
    }

    #[test]
    fn test_remove_by_id_is_idempotent() {
        let mut store = RecordStore::new();
        store.replace_all(vec![food(1, "a"), food(2, "b")]);

        assert!(store.remove_by_id(1));
        assert!(!store.remove_by_id(1));

        assert!(store.find(1).is_none());
        assert_eq!(store.as_slice(), &[food(2, "b")]);
    }
}
