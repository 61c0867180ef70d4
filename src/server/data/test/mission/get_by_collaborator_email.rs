use super::*;

/// Tests that only the collaborator's own missions are returned.
///
/// Expected: Ok(Vec) containing only missions for the queried email
#[tokio::test]
async fn returns_only_missions_of_collaborator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_mission(db, "alice@test.com").await?;
    create_mission(db, "alice@test.com").await?;
    create_mission(db, "bob@test.com").await?;

    let repo = MissionRepository::new(db.clone());
    let missions = repo.get_by_collaborator_email("alice@test.com").await?;

    assert_eq!(missions.len(), 2);

    Ok(())
}

/// Tests ordering by group number, then client number.
///
/// Expected: Ok(Vec) sorted by (numero_groupe, numero_client)
#[tokio::test]
async fn orders_by_group_then_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let email = "alice@test.com";
    MissionFactory::new(db, email)
        .numero_groupe("002")
        .numero_client("A")
        .build()
        .await?;
    MissionFactory::new(db, email)
        .numero_groupe("001")
        .numero_client("B")
        .build()
        .await?;
    MissionFactory::new(db, email)
        .numero_groupe("001")
        .numero_client("A")
        .build()
        .await?;

    let repo = MissionRepository::new(db.clone());
    let missions = repo.get_by_collaborator_email(email).await?;

    let keys: Vec<(&str, &str)> = missions
        .iter()
        .map(|m| (m.numero_groupe.as_str(), m.numero_client.as_str()))
        .collect();
    assert_eq!(keys, vec![("001", "A"), ("001", "B"), ("002", "A")]);

    Ok(())
}

/// Tests that step flags are carried into the phase progress.
///
/// Expected: phase percentages reflect the completed steps
#[tokio::test]
async fn maps_step_flags_to_phases() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MissionFactory::new(db, "alice@test.com")
        .mission("Commissariat aux comptes")
        .steps(&["lab", "conflit_check", "nog", "checklist", "revision", "supervision"])
        .build()
        .await?;

    let repo = MissionRepository::new(db.clone());
    let missions = repo.get_by_collaborator_email("alice@test.com").await?;
    let mission = &missions[0];

    assert_eq!(mission.mission, "Commissariat aux comptes");
    assert!(mission.before.lab);
    assert!(!mission.before.qac);
    assert_eq!(mission.before.percentage(), 40);
    assert_eq!(mission.during.percentage(), 100);
    assert_eq!(mission.end.percentage(), 0);

    Ok(())
}

/// Tests a collaborator without missions.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_mission(db, "alice@test.com").await?;

    let repo = MissionRepository::new(db.clone());

    assert!(repo
        .get_by_collaborator_email("nobody@test.com")
        .await?
        .is_empty());

    Ok(())
}
