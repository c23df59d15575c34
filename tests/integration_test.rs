use oc_lettings::lettings_actor::LettingsError;
use oc_lettings::lifecycle::SiteSystem;
use oc_lettings::model::{AddressCreate, AddressId, LettingCreate, ProfileCreate, UserCreate, UserId};
use oc_lettings::profiles_actor::ProfilesError;
use relation_framework::RuleKind;

fn main_street() -> AddressCreate {
    AddressCreate {
        number: 123,
        street: "Main Street".into(),
        city: "Anytown".into(),
        state: "CA".into(),
        zip_code: 12345,
        country_iso_code: "USA".into(),
    }
}

fn address_no(number: i64) -> AddressCreate {
    AddressCreate {
        number,
        ..main_street()
    }
}

/// End-to-end lettings lifecycle with a real actor.
#[tokio::test]
async fn test_letting_lifecycle_with_cascade() {
    let system = SiteSystem::new(8);
    let lettings = &system.lettings_client;

    let address = lettings
        .create_address(main_street())
        .await
        .expect("Failed to create address");
    let letting = lettings
        .create_letting(LettingCreate::new("Beautiful Apartment", address))
        .await
        .expect("Failed to create letting");

    let titles: Vec<_> = lettings
        .lettings()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.child.title)
        .collect();
    assert_eq!(titles, ["Beautiful Apartment"]);

    let detail = lettings.letting(letting).await.expect("Letting not found");
    assert_eq!(detail.parent.number, 123);
    assert_eq!(detail.parent.street, "Main Street");
    assert_eq!(detail.child.address, address);

    // Deleting the address takes the letting with it.
    assert_eq!(lettings.delete_address(address).await.unwrap(), Some(letting));
    assert!(matches!(
        lettings.letting(letting).await,
        Err(LettingsError::NotFound { .. })
    ));
    assert!(matches!(
        lettings.address(address).await,
        Err(LettingsError::NotFound { .. })
    ));
    assert!(lettings.lettings().await.unwrap().is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_invalid_address_reports_every_field_and_stores_nothing() {
    let system = SiteSystem::new(8);
    let lettings = &system.lettings_client;

    let err = lettings
        .create_address(AddressCreate {
            number: 10000,
            street: "s".repeat(65),
            city: "c".repeat(65),
            state: "C".into(),
            zip_code: 100000,
            country_iso_code: "US".into(),
        })
        .await
        .unwrap_err();

    let LettingsError::FieldConstraintViolation(errors) = err else {
        panic!("expected a field constraint violation, got {err:?}");
    };
    assert_eq!(
        errors.fields(),
        vec!["number", "street", "city", "state", "zip_code", "country_iso_code"]
    );
    assert!(lettings.addresses().await.unwrap().is_empty());

    // A rejected create does not use up an id.
    let first = lettings.create_address(main_street()).await.unwrap();
    assert_eq!(first, AddressId(1));
}

#[tokio::test]
async fn test_blank_street_is_rejected() {
    let system = SiteSystem::new(8);
    let err = system
        .lettings_client
        .create_address(AddressCreate {
            street: "   ".into(),
            ..main_street()
        })
        .await
        .unwrap_err();
    let LettingsError::FieldConstraintViolation(errors) = err else {
        panic!("expected a field constraint violation, got {err:?}");
    };
    assert_eq!(errors.violations()[0].kind, RuleKind::NotBlank);
}

#[tokio::test]
async fn test_second_letting_for_an_address_conflicts() {
    let system = SiteSystem::new(8);
    let lettings = &system.lettings_client;

    let address = lettings.create_address(main_street()).await.unwrap();
    lettings
        .create_letting(LettingCreate::new("First Apartment", address))
        .await
        .unwrap();

    let err = lettings
        .create_letting(LettingCreate::new("Second Apartment", address))
        .await
        .unwrap_err();
    assert!(matches!(err, LettingsError::UniquenessConflict { .. }));
    assert_eq!(lettings.lettings().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_letting_on_missing_address_is_not_found() {
    let system = SiteSystem::new(8);
    let err = system
        .lettings_client
        .create_letting(LettingCreate::new("Nowhere", AddressId(99)))
        .await
        .unwrap_err();
    assert!(matches!(err, LettingsError::NotFound { kind: "Address", .. }));
}

#[tokio::test]
async fn test_lettings_are_listed_by_title() {
    let system = SiteSystem::new(8);
    let lettings = &system.lettings_client;

    for (number, title) in [(1, "Zebra House"), (2, "Apple Villa"), (3, "Mango Flat")] {
        let address = lettings.create_address(address_no(number)).await.unwrap();
        lettings
            .create_letting(LettingCreate::new(title, address))
            .await
            .unwrap();
    }

    let titles: Vec<_> = lettings
        .lettings()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.child.title)
        .collect();
    assert_eq!(titles, ["Apple Villa", "Mango Flat", "Zebra House"]);

    let numbers: Vec<_> = lettings
        .addresses()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.number)
        .collect();
    assert_eq!(numbers, [1, 2, 3]);
}

#[tokio::test]
async fn test_deleting_a_letting_frees_its_address() {
    let system = SiteSystem::new(8);
    let lettings = &system.lettings_client;

    let address = lettings.create_address(main_street()).await.unwrap();
    let first = lettings
        .create_letting(LettingCreate::new("First", address))
        .await
        .unwrap();
    lettings.delete_letting(first).await.unwrap();

    lettings
        .create_letting(LettingCreate::new("Second", address))
        .await
        .expect("address should accept a new letting");
    assert!(lettings.address(address).await.is_ok());
}

#[tokio::test]
async fn test_concurrent_lettings_for_one_address_only_one_wins() {
    let system = SiteSystem::new(32);
    let address = system
        .lettings_client
        .create_address(main_street())
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let client = system.lettings_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create_letting(LettingCreate::new(format!("Letting {i}"), address))
                .await
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(LettingsError::UniquenessConflict { .. }) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(conflicts, 15);
}

#[tokio::test]
async fn test_readers_never_see_a_letting_without_its_address() {
    let system = SiteSystem::new(64);
    let lettings = system.lettings_client.clone();

    let mut addresses = Vec::new();
    for number in 1..=50 {
        let address = lettings.create_address(address_no(number)).await.unwrap();
        lettings
            .create_letting(LettingCreate::new(format!("Letting {number:02}"), address))
            .await
            .unwrap();
        addresses.push(address);
    }

    let mut readers = Vec::new();
    for _ in 0..4 {
        let client = lettings.clone();
        readers.push(tokio::spawn(async move {
            for _ in 0..50 {
                let listed = client.lettings().await.expect("read faulted");
                for linked in listed {
                    assert_eq!(linked.child.address, linked.parent.id);
                }
                tokio::task::yield_now().await;
            }
        }));
    }

    for address in addresses {
        assert!(lettings.delete_address(address).await.unwrap().is_some());
        tokio::task::yield_now().await;
    }

    for reader in readers {
        reader.await.unwrap();
    }
    assert!(lettings.lettings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_profile_lookup_by_username() {
    let system = SiteSystem::new(8);
    let profiles = &system.profiles_client;

    let user = profiles
        .create_user(UserCreate::new("user1").with_email("user1@example.com"))
        .await
        .unwrap();
    profiles
        .create_profile(ProfileCreate::new(user).with_favorite_city("Paris"))
        .await
        .unwrap();

    let found = profiles.profile_by_username("user1").await.unwrap();
    assert_eq!(found.parent.email, "user1@example.com");
    assert_eq!(found.child.favorite_city, "Paris");

    // Exact and case-sensitive.
    for miss in ["User1", "user", "user1 "] {
        assert!(matches!(
            profiles.profile_by_username(miss).await,
            Err(ProfilesError::NotFound { .. })
        ));
    }
}

#[tokio::test]
async fn test_user_without_profile_is_not_found() {
    let system = SiteSystem::new(8);
    let profiles = &system.profiles_client;

    profiles.create_user(UserCreate::new("lonely")).await.unwrap();
    assert!(matches!(
        profiles.profile_by_username("lonely").await,
        Err(ProfilesError::NotFound { .. })
    ));
    assert!(profiles.profiles().await.unwrap().is_empty());
    assert_eq!(profiles.users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let system = SiteSystem::new(8);
    let profiles = &system.profiles_client;

    profiles.create_user(UserCreate::new("user1")).await.unwrap();
    let err = profiles.create_user(UserCreate::new("user1")).await.unwrap_err();
    assert!(matches!(err, ProfilesError::UniquenessConflict { .. }));

    // Usernames differing only in case are distinct.
    profiles.create_user(UserCreate::new("USER1")).await.unwrap();
}

#[tokio::test]
async fn test_second_profile_for_a_user_conflicts() {
    let system = SiteSystem::new(8);
    let profiles = &system.profiles_client;

    let user = profiles.create_user(UserCreate::new("user1")).await.unwrap();
    profiles
        .create_profile(ProfileCreate::new(user).with_favorite_city("Paris"))
        .await
        .unwrap();
    let err = profiles
        .create_profile(ProfileCreate::new(user).with_favorite_city("Los Angeles"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProfilesError::UniquenessConflict { .. }));
}

#[tokio::test]
async fn test_deleting_a_user_cascades_and_frees_the_username() {
    let system = SiteSystem::new(8);
    let profiles = &system.profiles_client;

    let user = profiles.create_user(UserCreate::new("user1")).await.unwrap();
    let profile = profiles
        .create_profile(ProfileCreate::new(user).with_favorite_city("Tokyo"))
        .await
        .unwrap();

    assert_eq!(profiles.delete_user(user).await.unwrap(), Some(profile));
    assert!(matches!(
        profiles.profile(profile).await,
        Err(ProfilesError::NotFound { .. })
    ));
    assert!(matches!(
        profiles.user(user).await,
        Err(ProfilesError::NotFound { .. })
    ));

    // The username can be registered again, under a fresh id.
    let again = profiles.create_user(UserCreate::new("user1")).await.unwrap();
    assert_ne!(again, user);
    assert_eq!(again, UserId(2));
}

#[tokio::test]
async fn test_blank_favorite_city_is_kept() {
    let system = SiteSystem::new(8);
    let profiles = &system.profiles_client;

    let user = profiles.create_user(UserCreate::new("user3")).await.unwrap();
    profiles.create_profile(ProfileCreate::new(user)).await.unwrap();

    let listed = profiles.profiles().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].parent.username, "user3");
    assert_eq!(listed[0].child.favorite_city, "");
}

#[tokio::test]
async fn test_invalid_profile_data_is_rejected() {
    let system = SiteSystem::new(8);
    let profiles = &system.profiles_client;

    let err = profiles
        .create_user(UserCreate::new("").with_email("e".repeat(255)))
        .await
        .unwrap_err();
    let ProfilesError::FieldConstraintViolation(errors) = err else {
        panic!("expected a field constraint violation, got {err:?}");
    };
    assert_eq!(errors.fields(), vec!["username", "email"]);

    let user = profiles.create_user(UserCreate::new("user1")).await.unwrap();
    let err = profiles
        .create_profile(ProfileCreate::new(user).with_favorite_city("x".repeat(65)))
        .await
        .unwrap_err();
    assert!(matches!(err, ProfilesError::FieldConstraintViolation(_)));
    assert!(profiles.profiles().await.unwrap().is_empty());
}
