//! Shared harness for the sqlite-backed suites: in-memory database, schema
//! from the entities, and the classic two-teams seed data.

use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use members::infra::storage::entity::{member, team};
use members::{MembersRepository, NewMember, NewTeam, SeaOrmMembersRepository};

pub async fn seeded_repo() -> Result<SeaOrmMembersRepository<DatabaseConnection>> {
    let db = Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    let repo = SeaOrmMembersRepository::new(db);
    seed(&repo).await?;
    Ok(repo)
}

async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(team::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(member::Entity)))
        .await?;
    Ok(())
}

/// teamA: member1 (10), member2 (20); teamB: member3 (30), member4 (40);
/// member5 (50) belongs to no team.
async fn seed(repo: &SeaOrmMembersRepository<DatabaseConnection>) -> Result<()> {
    let team_a = repo
        .insert_team(NewTeam {
            name: "teamA".to_string(),
        })
        .await?;
    let team_b = repo
        .insert_team(NewTeam {
            name: "teamB".to_string(),
        })
        .await?;

    for (username, age, team_id) in [
        ("member1", 10, Some(team_a.id)),
        ("member2", 20, Some(team_a.id)),
        ("member3", 30, Some(team_b.id)),
        ("member4", 40, Some(team_b.id)),
        ("member5", 50, None),
    ] {
        repo.insert_member(NewMember {
            username: Some(username.to_string()),
            age,
            team_id,
        })
        .await?;
    }
    Ok(())
}
