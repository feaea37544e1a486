//! In-memory implementation of the `FlashcardRepository` trait.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use flashdeck_core::{
    domain::{Card, Deck, InsertCard, InsertDeck},
    ports::{FlashcardRepository, RepositoryError},
};

/// Both collections and their ID counters.
///
/// Maps are keyed by ID; since IDs only grow, key order is insertion order.
#[derive(Debug)]
struct StoreState {
    decks: BTreeMap<i64, Deck>,
    cards: BTreeMap<i64, Card>,
    next_deck_id: i64,
    next_card_id: i64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            decks: BTreeMap::new(),
            cards: BTreeMap::new(),
            next_deck_id: 1,
            next_card_id: 1,
        }
    }
}

/// In-memory implementation of the `FlashcardRepository` trait.
///
/// All state sits behind a single mutex held for the whole of each
/// operation, so no two operations interleave. State is lost when the
/// repository is dropped.
#[derive(Debug, Default)]
pub struct MemoryFlashcardRepository {
    state: Mutex<StoreState>,
}

impl MemoryFlashcardRepository {
    /// Create an empty repository. Both ID counters start at 1.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlashcardRepository for MemoryFlashcardRepository {
    async fn get_deck(&self, id: i64) -> Result<Option<Deck>, RepositoryError> {
        Ok(self.state.lock().await.decks.get(&id).cloned())
    }

    async fn list_decks(&self) -> Result<Vec<Deck>, RepositoryError> {
        Ok(self.state.lock().await.decks.values().cloned().collect())
    }

    async fn create_deck(&self, deck: InsertDeck) -> Result<Deck, RepositoryError> {
        let mut state = self.state.lock().await;
        let id = state.next_deck_id;
        state.next_deck_id += 1;

        let deck = Deck::from_insert(id, deck);
        state.decks.insert(id, deck.clone());
        debug!(deck_id = id, name = %deck.name, "Created deck");
        Ok(deck)
    }

    async fn delete_deck(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        let removed = state.decks.remove(&id).is_some();

        let before = state.cards.len();
        state.cards.retain(|_, card| card.deck_id != id);
        let cascaded = before - state.cards.len();

        debug!(deck_id = id, removed, cascaded, "Deleted deck");
        Ok(())
    }

    async fn get_card(&self, id: i64) -> Result<Option<Card>, RepositoryError> {
        Ok(self.state.lock().await.cards.get(&id).cloned())
    }

    async fn cards_by_deck(&self, deck_id: i64) -> Result<Vec<Card>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .cards
            .values()
            .filter(|card| card.deck_id == deck_id)
            .cloned()
            .collect())
    }

    async fn create_card(&self, card: InsertCard) -> Result<Card, RepositoryError> {
        let mut state = self.state.lock().await;
        let id = state.next_card_id;
        state.next_card_id += 1;

        let card = Card::from_insert(id, card);
        state.cards.insert(id, card.clone());
        debug!(card_id = id, deck_id = card.deck_id, "Created card");
        Ok(card)
    }

    async fn delete_card(&self, id: i64) -> Result<(), RepositoryError> {
        let removed = self.state.lock().await.cards.remove(&id).is_some();
        debug!(card_id = id, removed, "Deleted card");
        Ok(())
    }

    async fn deck_count(&self) -> Result<usize, RepositoryError> {
        Ok(self.state.lock().await.decks.len())
    }

    async fn card_count(&self) -> Result<usize, RepositoryError> {
        Ok(self.state.lock().await.cards.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_deck() {
        let repo = MemoryFlashcardRepository::new();

        let created = repo
            .create_deck(InsertDeck::new("Math").with_tags(["algebra"]))
            .await
            .unwrap();

        let found = repo.get_deck(created.id).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Math");
        assert_eq!(found.tags, Some(vec!["algebra".to_string()]));
        assert_eq!(found.description, None);
    }

    #[tokio::test]
    async fn test_get_missing_deck_is_none() {
        let repo = MemoryFlashcardRepository::new();
        assert!(repo.get_deck(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_deck_ids_strictly_increase_and_are_not_reused() {
        let repo = MemoryFlashcardRepository::new();

        let a = repo.create_deck(InsertDeck::new("a")).await.unwrap();
        let b = repo.create_deck(InsertDeck::new("b")).await.unwrap();
        repo.delete_deck(b.id).await.unwrap();
        let c = repo.create_deck(InsertDeck::new("c")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_card_ids_are_independent_of_deck_ids() {
        let repo = MemoryFlashcardRepository::new();

        repo.create_deck(InsertDeck::new("a")).await.unwrap();
        repo.create_deck(InsertDeck::new("b")).await.unwrap();
        let card = repo
            .create_card(InsertCard::new(2, "front", "back"))
            .await
            .unwrap();

        assert_eq!(card.id, 1);
    }

    #[tokio::test]
    async fn test_list_decks_in_insertion_order() {
        let repo = MemoryFlashcardRepository::new();
        for name in ["Zoology", "Art", "Math"] {
            repo.create_deck(InsertDeck::new(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_decks()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, ["Zoology", "Art", "Math"]);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none_even_if_never_existed() {
        let repo = MemoryFlashcardRepository::new();

        repo.delete_deck(9999).await.unwrap();
        assert!(repo.get_deck(9999).await.unwrap().is_none());

        let deck = repo.create_deck(InsertDeck::new("x")).await.unwrap();
        repo.delete_deck(deck.id).await.unwrap();
        assert!(repo.get_deck(deck.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_deck_cascades_only_to_its_cards() {
        let repo = MemoryFlashcardRepository::new();
        let keep = repo.create_deck(InsertDeck::new("keep")).await.unwrap();
        let gone = repo.create_deck(InsertDeck::new("gone")).await.unwrap();

        repo.create_card(InsertCard::new(gone.id, "q1", "a1"))
            .await
            .unwrap();
        repo.create_card(InsertCard::new(gone.id, "q2", "a2"))
            .await
            .unwrap();
        let kept_card = repo
            .create_card(InsertCard::new(keep.id, "q3", "a3"))
            .await
            .unwrap();

        repo.delete_deck(gone.id).await.unwrap();

        assert!(repo.cards_by_deck(gone.id).await.unwrap().is_empty());
        assert_eq!(repo.cards_by_deck(keep.id).await.unwrap(), vec![kept_card]);
        assert_eq!(repo.card_count().await.unwrap(), 1);
        assert_eq!(repo.deck_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_deck_still_removes_orphan_cards() {
        let repo = MemoryFlashcardRepository::new();
        repo.create_card(InsertCard::new(7, "orphan", "card"))
            .await
            .unwrap();

        repo.delete_deck(7).await.unwrap();

        assert_eq!(repo.card_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_card_for_unknown_deck_succeeds() {
        let repo = MemoryFlashcardRepository::new();

        let card = repo
            .create_card(InsertCard::new(42, "France", "Paris"))
            .await
            .unwrap();

        assert_eq!(card.id, 1);
        assert_eq!(card.deck_id, 42);
        assert!(repo.get_deck(42).await.unwrap().is_none());
        assert_eq!(repo.cards_by_deck(42).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_capitals_scenario() {
        let repo = MemoryFlashcardRepository::new();

        let deck = repo.create_deck(InsertDeck::new("Capitals")).await.unwrap();
        assert_eq!(deck.id, 1);

        let card = repo
            .create_card(InsertCard::new(1, "France", "Paris"))
            .await
            .unwrap();
        assert_eq!(card.id, 1);

        let cards = repo.cards_by_deck(1).await.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "France");
        assert_eq!(cards[0].back, "Paris");

        repo.delete_deck(1).await.unwrap();
        assert!(repo.cards_by_deck(1).await.unwrap().is_empty());
        assert!(repo.get_deck(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_card_is_idempotent() {
        let repo = MemoryFlashcardRepository::new();
        let card = repo
            .create_card(InsertCard::new(1, "front", "back").with_notes("mnemonic"))
            .await
            .unwrap();
        assert_eq!(card.notes.as_deref(), Some("mnemonic"));

        repo.delete_card(card.id).await.unwrap();
        repo.delete_card(card.id).await.unwrap();

        assert!(repo.get_card(card.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_tags_distinct_in_first_seen_order() {
        let repo = MemoryFlashcardRepository::new();
        repo.create_deck(InsertDeck::new("a").with_tags(["favori", "math", "favori"]))
            .await
            .unwrap();
        repo.create_deck(InsertDeck::new("b")).await.unwrap();
        repo.create_deck(InsertDeck::new("c").with_tags(["nouveau", "math"]))
            .await
            .unwrap();

        assert_eq!(
            repo.list_tags().await.unwrap(),
            ["favori", "math", "nouveau"]
        );
    }

    #[tokio::test]
    async fn test_deck_tags_keep_duplicates() {
        let repo = MemoryFlashcardRepository::new();
        let deck = repo
            .create_deck(InsertDeck::new("dup").with_tags(["x", "x"]))
            .await
            .unwrap();

        assert_eq!(deck.tags, Some(vec!["x".to_string(), "x".to_string()]));
    }
}
