use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use stealthnap_api::domain::repository::{
    GearRepository, GeocodingPort, LocationRepository, ThreadRepository, UserRepository,
};
use stealthnap_api::domain::types::{
    Comment, Gear, Location, NewComment, NewGear, NewLocation, NewThread, NewUser, Thread, User,
    UserSummary,
};
use stealthnap_api::error::ApiError;
use stealthnap_domain::geo::GeocodedPlace;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub fn hiker() -> UserSummary {
    UserSummary {
        id: 1,
        email: "hiker@example.com".to_owned(),
    }
}

/// A fixed instant plus `secs`, for deterministic ordering.
pub fn at(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_760_000_000, 0).unwrap() + Duration::seconds(secs)
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(ApiError::EmailTaken);
        }
        let created = User {
            id: users.len() as i32 + 1,
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            role: user.role,
            created_at: Utc::now(),
        };
        users.push(created.clone());
        Ok(created)
    }
}

// ── MockGearRepo ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockGearRepo {
    pub gear: Arc<Mutex<Vec<Gear>>>,
}

impl GearRepository for MockGearRepo {
    async fn list(&self) -> Result<Vec<Gear>, ApiError> {
        Ok(self.gear.lock().unwrap().clone())
    }

    async fn create(&self, new: &NewGear) -> Result<Gear, ApiError> {
        let mut gear = self.gear.lock().unwrap();
        let created = Gear {
            id: gear.len() as i32 + 1,
            name: new.name.clone(),
            category: new.category.clone(),
            description: new.description.clone(),
            owner_id: Some(new.owner_id),
            created_at: Utc::now(),
        };
        gear.push(created.clone());
        Ok(created)
    }
}

// ── MockLocationRepo ─────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockLocationRepo {
    pub locations: Arc<Mutex<Vec<Location>>>,
}

impl MockLocationRepo {
    pub fn locations_handle(&self) -> Arc<Mutex<Vec<Location>>> {
        Arc::clone(&self.locations)
    }
}

impl LocationRepository for MockLocationRepo {
    async fn list(&self) -> Result<Vec<Location>, ApiError> {
        Ok(self.locations.lock().unwrap().clone())
    }

    async fn create(&self, new: &NewLocation) -> Result<Location, ApiError> {
        let mut locations = self.locations.lock().unwrap();
        let created = Location {
            id: locations.len() as i32 + 1,
            name: new.name.clone(),
            zip_code: new.zip_code.clone(),
            address: new.address.clone(),
            notes: new.notes.clone(),
            latitude: new.latitude,
            longitude: new.longitude,
            country: new.country.clone(),
            owner_id: new.owner_id,
            created_at: Utc::now(),
            user: None,
        };
        locations.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let mut locations = self.locations.lock().unwrap();
        let before = locations.len();
        locations.retain(|l| l.id != id);
        Ok(locations.len() < before)
    }
}

// ── MockThreadRepo ───────────────────────────────────────────────────────────

/// Stores rows unordered; `list_*` apply the same ordering as the database.
#[derive(Default)]
pub struct MockThreadRepo {
    pub threads: Arc<Mutex<Vec<Thread>>>,
    pub comments: Arc<Mutex<Vec<Comment>>>,
}

impl MockThreadRepo {
    pub fn new(threads: Vec<Thread>, comments: Vec<Comment>) -> Self {
        Self {
            threads: Arc::new(Mutex::new(threads)),
            comments: Arc::new(Mutex::new(comments)),
        }
    }
}

impl ThreadRepository for MockThreadRepo {
    async fn list_threads(&self) -> Result<Vec<Thread>, ApiError> {
        let mut threads = self.threads.lock().unwrap().clone();
        threads.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(threads)
    }

    async fn list_comments(&self, thread_ids: &[i32]) -> Result<Vec<Comment>, ApiError> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| thread_ids.contains(&c.thread_id))
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(comments)
    }

    async fn create_thread(&self, new: &NewThread) -> Result<Thread, ApiError> {
        let mut threads = self.threads.lock().unwrap();
        let created = Thread {
            id: threads.len() as i32 + 1,
            title: new.title.clone(),
            content: new.content.clone(),
            owner_id: new.owner_id,
            created_at: Utc::now(),
            user: None,
        };
        threads.push(created.clone());
        Ok(created)
    }

    async fn thread_exists(&self, id: i32) -> Result<bool, ApiError> {
        Ok(self.threads.lock().unwrap().iter().any(|t| t.id == id))
    }

    async fn create_comment(&self, new: &NewComment) -> Result<Comment, ApiError> {
        let mut comments = self.comments.lock().unwrap();
        let created = Comment {
            id: comments.len() as i32 + 1,
            content: new.content.clone(),
            thread_id: new.thread_id,
            owner_id: new.owner_id,
            created_at: Utc::now(),
            user: None,
        };
        comments.push(created.clone());
        Ok(created)
    }
}

// ── MockGeocoder ─────────────────────────────────────────────────────────────

pub enum GeocodeOutcome {
    Found(GeocodedPlace),
    Miss,
    TransportError,
}

pub struct MockGeocoder {
    pub outcome: GeocodeOutcome,
    pub calls: Arc<AtomicUsize>,
}

impl MockGeocoder {
    pub fn new(outcome: GeocodeOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls_handle(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl GeocodingPort for MockGeocoder {
    async fn lookup(
        &self,
        _zip_code: &str,
        _address: Option<&str>,
    ) -> Result<Option<GeocodedPlace>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            GeocodeOutcome::Found(place) => Ok(Some(place.clone())),
            GeocodeOutcome::Miss => Ok(None),
            GeocodeOutcome::TransportError => {
                Err(ApiError::Internal(anyhow::anyhow!("connection refused")))
            }
        }
    }
}
