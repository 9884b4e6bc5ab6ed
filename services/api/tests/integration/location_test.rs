use std::sync::atomic::Ordering;

use stealthnap_api::error::ApiError;
use stealthnap_api::usecase::location::{
    CreateLocationInput, CreateLocationUseCase, DeleteLocationUseCase, ListLocationsUseCase,
};
use stealthnap_auth_types::identity::Identity;
use stealthnap_domain::geo::{Coordinates, GeocodedPlace};
use stealthnap_domain::user::UserRole;

use crate::helpers::{GeocodeOutcome, MockGeocoder, MockLocationRepo, hiker};

fn input(zip_code: &str) -> CreateLocationInput {
    CreateLocationInput {
        name: Some("Quiet pullout".to_owned()),
        zip_code: Some(zip_code.to_owned()),
        address: None,
        notes: None,
        latitude: None,
        longitude: None,
        country: None,
    }
}

fn mountain_view() -> GeocodedPlace {
    GeocodedPlace {
        coordinates: Coordinates {
            latitude: 37.386,
            longitude: -122.084,
        },
        country: Some("United States".to_owned()),
    }
}

fn identity(role: UserRole) -> Identity {
    Identity {
        user_id: 9,
        email: "someone@example.com".to_owned(),
        role,
    }
}

// ── CreateLocationUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_geocode_once_when_coordinates_missing() {
    let geocoder = MockGeocoder::new(GeocodeOutcome::Found(mountain_view()));
    let calls = geocoder.calls_handle();
    let usecase = CreateLocationUseCase {
        repo: MockLocationRepo::default(),
        geocoder,
    };

    let location = usecase.execute(hiker(), input("94043")).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(location.latitude, Some(37.386));
    assert_eq!(location.longitude, Some(-122.084));
    assert_eq!(location.country.as_deref(), Some("United States"));
    assert_eq!(location.owner_id, hiker().id);
    assert_eq!(location.user, Some(hiker()));
}

#[tokio::test]
async fn should_store_without_coordinates_on_geocoding_miss() {
    let geocoder = MockGeocoder::new(GeocodeOutcome::Miss);
    let calls = geocoder.calls_handle();
    let repo = MockLocationRepo::default();
    let stored = repo.locations_handle();
    let usecase = CreateLocationUseCase { repo, geocoder };

    let location = usecase.execute(hiker(), input("00000")).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(location.latitude.is_none());
    assert!(location.longitude.is_none());
    assert_eq!(stored.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_store_without_coordinates_on_transport_error() {
    let geocoder = MockGeocoder::new(GeocodeOutcome::TransportError);
    let calls = geocoder.calls_handle();
    let usecase = CreateLocationUseCase {
        repo: MockLocationRepo::default(),
        geocoder,
    };

    let location = usecase.execute(hiker(), input("94043")).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(location.latitude.is_none());
    assert!(location.longitude.is_none());
}

#[tokio::test]
async fn should_skip_geocoding_when_coordinates_given() {
    let geocoder = MockGeocoder::new(GeocodeOutcome::Found(mountain_view()));
    let calls = geocoder.calls_handle();
    let usecase = CreateLocationUseCase {
        repo: MockLocationRepo::default(),
        geocoder,
    };

    let location = usecase
        .execute(
            hiker(),
            CreateLocationInput {
                latitude: Some(45.0),
                longitude: Some(-110.0),
                ..input("59030")
            },
        )
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(location.latitude, Some(45.0));
    assert_eq!(location.longitude, Some(-110.0));
    assert!(location.country.is_none());
}

#[tokio::test]
async fn should_geocode_when_only_one_coordinate_given() {
    let geocoder = MockGeocoder::new(GeocodeOutcome::Found(mountain_view()));
    let calls = geocoder.calls_handle();
    let usecase = CreateLocationUseCase {
        repo: MockLocationRepo::default(),
        geocoder,
    };

    let location = usecase
        .execute(
            hiker(),
            CreateLocationInput {
                latitude: Some(45.0),
                ..input("94043")
            },
        )
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(location.latitude, Some(37.386));
}

#[tokio::test]
async fn should_drop_lone_coordinate_on_geocoding_miss() {
    let usecase = CreateLocationUseCase {
        repo: MockLocationRepo::default(),
        geocoder: MockGeocoder::new(GeocodeOutcome::Miss),
    };

    let location = usecase
        .execute(
            hiker(),
            CreateLocationInput {
                longitude: Some(-122.0),
                ..input("94043")
            },
        )
        .await
        .unwrap();

    assert!(location.latitude.is_none());
    assert!(location.longitude.is_none());
}

#[tokio::test]
async fn should_keep_caller_country_over_geocoded_one() {
    let usecase = CreateLocationUseCase {
        repo: MockLocationRepo::default(),
        geocoder: MockGeocoder::new(GeocodeOutcome::Found(mountain_view())),
    };

    let location = usecase
        .execute(
            hiker(),
            CreateLocationInput {
                country: Some("USA".to_owned()),
                ..input("94043")
            },
        )
        .await
        .unwrap();

    assert_eq!(location.country.as_deref(), Some("USA"));
}

#[tokio::test]
async fn should_require_name_and_zip_code_before_geocoding() {
    let geocoder = MockGeocoder::new(GeocodeOutcome::Miss);
    let calls = geocoder.calls_handle();
    let usecase = CreateLocationUseCase {
        repo: MockLocationRepo::default(),
        geocoder,
    };

    let result = usecase
        .execute(
            hiker(),
            CreateLocationInput {
                name: Some(" ".to_owned()),
                ..input("94043")
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::MissingFields(_))));

    let result = usecase
        .execute(
            hiker(),
            CreateLocationInput {
                zip_code: None,
                ..input("")
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::MissingFields(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// ── DeleteLocationUseCase ────────────────────────────────────────────────────

async fn repo_with_one_location() -> MockLocationRepo {
    let usecase = CreateLocationUseCase {
        repo: MockLocationRepo::default(),
        geocoder: MockGeocoder::new(GeocodeOutcome::Miss),
    };
    usecase.execute(hiker(), input("94043")).await.unwrap();
    usecase.repo
}

#[tokio::test]
async fn should_forbid_delete_for_regular_user() {
    let repo = repo_with_one_location().await;
    let stored = repo.locations_handle();
    let usecase = DeleteLocationUseCase { repo };

    let result = usecase.execute(&identity(UserRole::User), 1).await;

    assert!(
        matches!(result, Err(ApiError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
    assert_eq!(stored.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_delete_as_admin_and_omit_from_list() {
    let repo = repo_with_one_location().await;
    let usecase = DeleteLocationUseCase { repo };

    usecase.execute(&identity(UserRole::Admin), 1).await.unwrap();

    let list = ListLocationsUseCase { repo: usecase.repo }
        .execute()
        .await
        .unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn should_report_missing_location_on_delete() {
    let usecase = DeleteLocationUseCase {
        repo: MockLocationRepo::default(),
    };

    let result = usecase.execute(&identity(UserRole::Admin), 42).await;
    assert!(matches!(result, Err(ApiError::LocationNotFound)));
}
