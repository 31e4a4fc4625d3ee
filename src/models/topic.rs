//! Topic page state: the selected concept and its position carousel.

use crate::domain::curriculum::{Concept, StudyPosition, Topic, TopicId, topic};
use crate::domain::{Boundary, SequencerEvent, SequencerState};

#[derive(Clone, Copy, Debug)]
pub struct TopicModel {
    topic: &'static Topic,
    concept: usize,
    carousel: SequencerState,
}

impl TopicModel {
    pub fn new(id: TopicId) -> Self {
        let topic = topic(id);
        Self {
            topic,
            concept: 0,
            carousel: carousel_for(topic.concept(0)),
        }
    }

    pub fn topic(&self) -> &'static Topic {
        self.topic
    }

    pub fn concept_index(&self) -> usize {
        self.concept
    }

    pub fn concept(&self) -> Option<&'static Concept> {
        self.topic.concept(self.concept)
    }

    pub fn position_index(&self) -> usize {
        self.carousel.step()
    }

    pub fn position_count(&self) -> usize {
        self.concept().map_or(0, |c| c.positions.len())
    }

    pub fn position(&self) -> Option<&'static StudyPosition> {
        self.concept()
            .and_then(|c| c.positions.get(self.carousel.step()))
    }

    /// Select a concept; the carousel always restarts at its first position
    pub fn select_concept(&mut self, index: usize) {
        if index < self.topic.concepts.len() {
            self.concept = index;
            self.carousel = carousel_for(self.topic.concept(index));
        }
    }

    pub fn next_position(&mut self) {
        self.carousel = self.carousel.transition(SequencerEvent::Next).0;
    }

    pub fn previous_position(&mut self) {
        self.carousel = self.carousel.transition(SequencerEvent::Previous).0;
    }
}

fn carousel_for(concept: Option<&Concept>) -> SequencerState {
    let last = concept.map_or(0, |c| c.positions.len().saturating_sub(1));
    SequencerState::new(last, Boundary::Wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut model = TopicModel::new(TopicId::PositionalPlay);
        let count = model.position_count();
        assert_eq!(count, 4);

        model.previous_position();
        assert_eq!(model.position_index(), count - 1);
        model.next_position();
        assert_eq!(model.position_index(), 0);
    }

    #[test]
    fn test_selecting_concept_resets_carousel() {
        let mut model = TopicModel::new(TopicId::EndgameBasics);
        model.next_position();
        model.next_position();
        assert_eq!(model.position_index(), 2);

        model.select_concept(1);
        assert_eq!(model.concept_index(), 1);
        assert_eq!(model.position_index(), 0);
        assert_eq!(model.position().map(|p| p.title), Some("Rooks Behind Pawns"));
    }

    #[test]
    fn test_out_of_range_concept_is_ignored() {
        let mut model = TopicModel::new(TopicId::Planning);
        model.select_concept(99);
        assert_eq!(model.concept_index(), 0);
    }

    #[test]
    fn test_practice_topic_has_no_positions() {
        let mut model = TopicModel::new(TopicId::OpeningPrinciples);
        assert!(model.topic().practice);
        assert_eq!(model.position(), None);
        model.next_position();
        assert_eq!(model.position_index(), 0);
    }
}
