//! Testimonial records and the read-only store the carousel rotates over.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use serde::Serialize;

use super::carousel::RotationController;

/// Highest star rating a testimonial can carry
pub const MAX_RATING: u8 = 5;

/// Errors raised while assembling static page content
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Rating {0} is out of range (0..=5)")]
    InvalidRating(u8),

    #[error("Testimonial list is empty")]
    EmptyTestimonials,

    #[error("Duplicate testimonial id: {0}")]
    DuplicateTestimonial(u32),
}

/// Star rating in `0..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, ContentError> {
        if value > MAX_RATING {
            return Err(ContentError::InvalidRating(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether the star at `position` (0-based) is filled
    pub fn is_filled(self, position: u8) -> bool {
        position < self.0
    }
}

/// A single customer testimonial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialRecord {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub avatar: &'static str,
    pub rating: Rating,
    pub text: &'static str,
    pub trip_type: &'static str,
    pub destination: &'static str,
    pub verified: bool,
}

/// Ordered, non-empty, immutable list of testimonials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialStore {
    records: Vec<TestimonialRecord>,
    len: NonZeroUsize,
}

impl TestimonialStore {
    /// Build a store, rejecting empty lists and duplicate ids.
    pub fn new(records: Vec<TestimonialRecord>) -> Result<Self, ContentError> {
        let len = NonZeroUsize::new(records.len()).ok_or(ContentError::EmptyTestimonials)?;

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(ContentError::DuplicateTestimonial(record.id));
            }
        }

        Ok(Self { records, len })
    }

    /// The testimonials shown on the landing page
    pub fn builtin() -> Self {
        Self {
            records: BUILTIN_TESTIMONIALS.to_vec(),
            len: BUILTIN_LEN,
        }
    }

    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    pub fn get(&self, index: usize) -> Option<&TestimonialRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestimonialRecord> {
        self.records.iter()
    }

    /// Fresh rotation controller sized to this store
    pub fn rotation(&self) -> RotationController {
        RotationController::new(self.len())
    }

    /// Record at the controller's current position.
    ///
    /// `None` only for a controller sized to a longer list than this one;
    /// controllers from [`Self::rotation`] always resolve.
    pub fn current(&self, rotation: &RotationController) -> Option<&TestimonialRecord> {
        self.records.get(rotation.current_index())
    }

    /// Mean rating across all records
    pub fn average_rating(&self) -> f32 {
        let total: u32 = self.records.iter().map(|r| u32::from(r.rating.value())).sum();
        total as f32 / self.len.get() as f32
    }
}

impl Default for TestimonialStore {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn five_stars() -> Rating {
    Rating(MAX_RATING)
}

const BUILTIN_TESTIMONIALS: [TestimonialRecord; 5] = [
    TestimonialRecord {
        id: 1,
        name: "Priya Sharma",
        location: "Mumbai, Maharashtra",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face",
        rating: five_stars(),
        text: "TravelAI Pro completely transformed how I plan my trips! The AI suggestions for hidden gems in Kerala were spot-on. I discovered places I never would have found on my own. The group planning feature made coordinating with my family so much easier.",
        trip_type: "Family Vacation",
        destination: "Kerala Backwaters",
        verified: true,
    },
    TestimonialRecord {
        id: 2,
        name: "Rajesh Kumar",
        location: "Delhi, NCR",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
        rating: five_stars(),
        text: "As a frequent business traveler, I needed something efficient and smart. The voice assistant feature is incredible - I can plan entire itineraries while commuting. The budget optimization saved me ₹25,000 on my last Rajasthan trip!",
        trip_type: "Business + Leisure",
        destination: "Rajasthan Circuit",
        verified: true,
    },
    TestimonialRecord {
        id: 3,
        name: "Ananya Patel",
        location: "Bangalore, Karnataka",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face",
        rating: five_stars(),
        text: "The emergency copilot feature gave me confidence to explore solo. When I got lost in the mountains of Himachal, the SOS feature and real-time assistance were lifesavers. This app is a must-have for every traveler!",
        trip_type: "Solo Adventure",
        destination: "Himachal Pradesh",
        verified: true,
    },
    TestimonialRecord {
        id: 4,
        name: "Vikram Singh",
        location: "Jaipur, Rajasthan",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
        rating: five_stars(),
        text: "Planning our honeymoon was stressful until we found TravelAI Pro. The AI understood our preferences perfectly and suggested romantic spots in Goa we never knew existed. The collaborative planning made it fun for both of us!",
        trip_type: "Honeymoon",
        destination: "Goa Beaches",
        verified: true,
    },
    TestimonialRecord {
        id: 5,
        name: "Meera Reddy",
        location: "Hyderabad, Telangana",
        avatar: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=150&h=150&fit=crop&crop=face",
        rating: five_stars(),
        text: "The multi-language support was amazing during our Northeast India trip. The app provided cultural insights and local customs that helped us connect with communities. It's like having a local guide everywhere you go!",
        trip_type: "Cultural Exploration",
        destination: "Northeast India",
        verified: true,
    },
];

const BUILTIN_LEN: NonZeroUsize = match NonZeroUsize::new(BUILTIN_TESTIMONIALS.len()) {
    Some(len) => len,
    None => panic!("built-in testimonial list is empty"),
};

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32) -> TestimonialRecord {
        TestimonialRecord {
            id,
            name: "Test Traveler",
            location: "Pune, Maharashtra",
            avatar: "/avatars/test.png",
            rating: Rating::new(4).unwrap(),
            text: "Great trip.",
            trip_type: "Weekend",
            destination: "Lonavala",
            verified: false,
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(0).unwrap().value(), 0);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert_eq!(Rating::new(6), Err(ContentError::InvalidRating(6)));
    }

    #[test]
    fn test_rating_filled_stars() {
        let rating = Rating::new(3).unwrap();
        let filled: Vec<bool> = (0..MAX_RATING).map(|i| rating.is_filled(i)).collect();
        assert_eq!(filled, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_store_rejects_empty() {
        assert_eq!(
            TestimonialStore::new(Vec::new()),
            Err(ContentError::EmptyTestimonials)
        );
    }

    #[test]
    fn test_store_rejects_duplicate_ids() {
        let result = TestimonialStore::new(vec![record(1), record(2), record(1)]);
        assert_eq!(result, Err(ContentError::DuplicateTestimonial(1)));
    }

    #[test]
    fn test_store_keeps_order() {
        let store = TestimonialStore::new(vec![record(7), record(3)]).unwrap();
        assert_eq!(store.len().get(), 2);
        assert_eq!(store.get(0).unwrap().id, 7);
        assert_eq!(store.get(1).unwrap().id, 3);
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_builtin_store() {
        let store = TestimonialStore::builtin();
        assert_eq!(store.len().get(), 5);
        assert!(store.iter().all(|r| r.verified && r.rating.value() == 5));
        assert_eq!(store.get(0).unwrap().name, "Priya Sharma");
        assert_eq!(store.average_rating(), 5.0);

        // Builtin data must also pass the checked constructor
        let rebuilt = TestimonialStore::new(store.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, store);
    }

    #[test]
    fn test_current_follows_rotation() {
        let store = TestimonialStore::builtin();
        let mut rotation = store.rotation();
        assert_eq!(store.current(&rotation).unwrap().id, 1);

        rotation.previous();
        assert_eq!(store.current(&rotation).unwrap().name, "Meera Reddy");
    }

    #[test]
    fn test_len_recorded_at_construction() {
        let store = TestimonialStore::new(vec![record(4), record(9), record(2)]).unwrap();
        assert_eq!(store.len().get(), 3);
        assert_eq!(store.rotation().len(), 3);
        assert_eq!(TestimonialStore::builtin().len().get(), BUILTIN_TESTIMONIALS.len());
    }

    #[test]
    fn test_current_with_foreign_rotation() {
        let small = TestimonialStore::new(vec![record(1), record(2)]).unwrap();
        let mut rotation = TestimonialStore::builtin().rotation();
        rotation.go_to(4).unwrap();
        assert!(small.current(&rotation).is_none());

        rotation.go_to(1).unwrap();
        assert_eq!(small.current(&rotation).unwrap().id, 2);
    }
}
