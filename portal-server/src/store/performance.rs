//! Performance review store

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use shared::models::{PerformanceReview, ReviewPayload};

/// In-memory performance reviews
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: DashMap<u64, PerformanceReview>,
    seq: AtomicU64,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self {
            reviews: DashMap::new(),
            seq: AtomicU64::new(1),
        }
    }

    pub fn insert_seeded(&self, review: PerformanceReview) {
        self.seq.fetch_max(review.id + 1, Ordering::Relaxed);
        self.reviews.insert(review.id, review);
    }

    /// Create a review; the reviewer is the authenticated requester
    pub fn create(
        &self,
        employee_id: u64,
        reviewer_id: u64,
        payload: ReviewPayload,
    ) -> PerformanceReview {
        let id = self.seq.fetch_add(1, Ordering::Relaxed);
        let review = PerformanceReview {
            id,
            employee_id,
            reviewer_id,
            period: payload.period,
            rating: payload.rating,
            comments: payload.comments,
        };
        self.reviews.insert(id, review.clone());
        review
    }

    pub fn get(&self, id: u64) -> Option<PerformanceReview> {
        self.reviews.get(&id).map(|r| r.clone())
    }

    /// Reviews for one employee, period descending
    pub fn list_for_employee(&self, employee_id: u64) -> Vec<PerformanceReview> {
        let mut reviews: Vec<_> = self
            .reviews
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .map(|r| r.clone())
            .collect();
        reviews.sort_by(|a, b| b.period.cmp(&a.period).then(a.id.cmp(&b.id)));
        reviews
    }

    /// Full-record overwrite; id, employee and reviewer are preserved
    pub fn overwrite(&self, id: u64, payload: ReviewPayload) -> Option<PerformanceReview> {
        let mut review = self.reviews.get_mut(&id)?;
        review.period = payload.period;
        review.rating = payload.rating;
        review.comments = payload.comments;
        Some(review.clone())
    }
}
