//! Flashcard repository port definition.
//!
//! This port defines the interface for storing and retrieving decks and
//! their cards. Implementations handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Card, Deck, InsertCard, InsertDeck};

/// Port for deck and card storage.
///
/// # Design Rules
///
/// - Absence is a value: lookups return `Ok(None)` or an empty `Vec`, never
///   `Err` for a missing ID
/// - Deletes are idempotent; deleting a missing ID is `Ok(())`
/// - IDs are assigned by the repository, strictly increasing per
///   collection and never reused
/// - `delete_deck` cascades to every card with a matching `deck_id`
/// - `create_card` does not check that `deck_id` refers to a stored deck
///
/// `Err` is reserved for backend faults.
///
/// # Example
///
/// ```ignore
/// let deck = repo.create_deck(InsertDeck::new("Capitals")).await?;
/// repo.create_card(InsertCard::new(deck.id, "France", "Paris")).await?;
/// repo.delete_deck(deck.id).await?; // also removes the card
/// ```
#[async_trait]
pub trait FlashcardRepository: Send + Sync {
    /// Get a deck by ID.
    async fn get_deck(&self, id: i64) -> Result<Option<Deck>, RepositoryError>;

    /// List all decks in insertion order.
    async fn list_decks(&self) -> Result<Vec<Deck>, RepositoryError>;

    /// Store a new deck under the next deck ID.
    async fn create_deck(&self, deck: InsertDeck) -> Result<Deck, RepositoryError>;

    /// Delete a deck and all of its cards.
    async fn delete_deck(&self, id: i64) -> Result<(), RepositoryError>;

    /// Get a card by ID.
    async fn get_card(&self, id: i64) -> Result<Option<Card>, RepositoryError>;

    /// List the cards whose `deck_id` matches, in insertion order.
    async fn cards_by_deck(&self, deck_id: i64) -> Result<Vec<Card>, RepositoryError>;

    /// Store a new card under the next card ID.
    async fn create_card(&self, card: InsertCard) -> Result<Card, RepositoryError>;

    /// Delete a single card.
    async fn delete_card(&self, id: i64) -> Result<(), RepositoryError>;

    /// Number of stored decks.
    async fn deck_count(&self) -> Result<usize, RepositoryError>;

    /// Number of stored cards.
    async fn card_count(&self) -> Result<usize, RepositoryError>;

    /// Distinct deck tags, in order of first appearance across decks.
    async fn list_tags(&self) -> Result<Vec<String>, RepositoryError> {
        let decks = self.list_decks().await?;
        let mut tags: Vec<String> = Vec::new();
        for tag in decks.into_iter().flat_map(|d| d.tags.unwrap_or_default()) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Ok(tags)
    }
}
