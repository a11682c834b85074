use crate::constants::{MIN_RING_ITEMS, RING_RADIUS_PX};
use crate::content::Project;

/// One card position on the ring.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSlot<'a> {
    pub index: usize,
    /// Index into the source project list this card repeats.
    pub source_index: usize,
    pub project: &'a Project,
    pub angle_deg: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RingLayout<'a> {
    slots: Vec<RingSlot<'a>>,
}

impl<'a> RingLayout<'a> {
    /// Lay out `projects` around the ring. Short lists are cycled and cut to
    /// exactly [`MIN_RING_ITEMS`] entries; longer lists are used unchanged.
    pub fn build(projects: &'a [Project]) -> Self {
        if projects.is_empty() {
            return Self { slots: Vec::new() };
        }
        let n = projects.len().max(MIN_RING_ITEMS);
        let spacing = 360.0 / n as f32;
        let slots = (0..n)
            .map(|i| {
                let source_index = i % projects.len();
                RingSlot {
                    index: i,
                    source_index,
                    project: &projects[source_index],
                    angle_deg: spacing * i as f32,
                }
            })
            .collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn spacing_deg(&self) -> Option<f32> {
        (!self.slots.is_empty()).then(|| 360.0 / self.slots.len() as f32)
    }

    pub fn slots(&self) -> &[RingSlot<'a>] {
        &self.slots
    }
}

/// CSS transform placing a card at `angle_deg` on the ring.
pub fn card_transform(angle_deg: f32) -> String {
    format!("rotateY({}deg) translateZ({}px)", angle_deg, RING_RADIUS_PX)
}

/// Header gradient of a card, cycling every three cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAccent {
    Ember,
    Ocean,
    Violet,
}

impl CardAccent {
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => CardAccent::Ember,
            1 => CardAccent::Ocean,
            _ => CardAccent::Violet,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            CardAccent::Ember => "accent-ember",
            CardAccent::Ocean => "accent-ocean",
            CardAccent::Violet => "accent-violet",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_transform_pushes_out_by_radius() {
        assert_eq!(card_transform(60.0), "rotateY(60deg) translateZ(280px)");
    }

    #[test]
    fn accents_cycle_every_three() {
        assert_eq!(CardAccent::for_index(0), CardAccent::Ember);
        assert_eq!(CardAccent::for_index(4), CardAccent::Ocean);
        assert_eq!(CardAccent::for_index(5), CardAccent::Violet);
        assert_eq!(CardAccent::for_index(5).css_class(), "accent-violet");
    }

    #[test]
    fn empty_list_gives_empty_ring() {
        let ring = RingLayout::build(&[]);
        assert!(ring.is_empty());
        assert_eq!(ring.spacing_deg(), None);
    }
}
