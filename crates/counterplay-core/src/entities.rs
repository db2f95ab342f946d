//! Entity model: positioned objects overlaid on the field image.
//!
//! Entities are plain data; reconstruction and interpolation logic lives
//! in the playback crate.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, TeamSide};
use crate::types::Position;

/// One tracked object on the field.
///
/// Wire format matches the detection oracle:
/// `{"id": "p1", "type": "player", "team": "home", "x": 40, "y": 50, "label": "GK"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identifier assigned at detection time, never reused.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    #[serde(rename = "team", default)]
    pub side: TeamSide,
    #[serde(flatten)]
    pub position: Position,
    /// Short display string, e.g. "GK" or "BALL".
    pub label: String,
}

/// An ordered sequence of entities: one complete snapshot of the world.
///
/// Ids are unique within a set. A later set derived from this one moves
/// entities but never adds or removes them; two sets with the same ids are
/// compatible. Sets have value semantics — cloning yields an independent
/// copy with no shared mutable state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntitySet {
    entities: Vec<Entity>,
}

impl EntitySet {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Find an entity by id.
    pub fn find(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Find an entity by id for mutation.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Move one entity to an edited position; components clamp to [0, 100].
    /// Returns false when the id is unknown.
    pub fn move_entity(&mut self, id: &str, x: f64, y: f64) -> bool {
        match self.find_mut(id) {
            Some(entity) => {
                entity.position = Position::new(x, y);
                true
            }
            None => false,
        }
    }

    /// Clamp every position to [0, 100]. Applied when a set crosses a trust
    /// boundary (decoded JSON, external callers).
    pub fn clamp_all(&mut self) {
        for entity in &mut self.entities {
            entity.position = entity.position.clamped();
        }
    }

    /// Whether `other` contains exactly the same ids as this set.
    pub fn is_compatible_with(&self, other: &EntitySet) -> bool {
        self.len() == other.len() && self.entities.iter().all(|e| other.find(&e.id).is_some())
    }
}

impl FromIterator<Entity> for EntitySet {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EntitySet {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
