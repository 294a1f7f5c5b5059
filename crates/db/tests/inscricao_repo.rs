mod common;

use assert_matches::assert_matches;
use painel_db::models::inscricao::{InscricaoStatus, StatusFilter};
use painel_db::repositories::{InscricaoRepo, UsuarioRepo};
use painel_db::ADMIN_EMAIL;

use common::new_inscricao;

#[tokio::test]
async fn test_create_defaults_to_pendente() {
    let pool = common::test_pool().await;
    let row = InscricaoRepo::create(&pool, &new_inscricao("Ana Souza"))
        .await
        .unwrap();

    assert_eq!(row.status(), Some(InscricaoStatus::Pendente));
    assert_eq!(row.renda_familiar, 1500.5);
    assert_eq!(row.cpf, None);
    assert_eq!(row.created_at, row.updated_at);

    let fetched = InscricaoRepo::find_by_id(&pool, row.id).await.unwrap();
    assert_eq!(fetched, Some(row));
}

#[tokio::test]
async fn test_status_filter_round_trip() {
    let pool = common::test_pool().await;
    let first = InscricaoRepo::create(&pool, &new_inscricao("Primeira")).await.unwrap();
    let second = InscricaoRepo::create(&pool, &new_inscricao("Segunda")).await.unwrap();
    let third = InscricaoRepo::create(&pool, &new_inscricao("Terceira")).await.unwrap();

    InscricaoRepo::update_status(&pool, second.id, InscricaoStatus::Aprovada, None)
        .await
        .unwrap();
    InscricaoRepo::update_status(&pool, third.id, InscricaoStatus::Aprovada, None)
        .await
        .unwrap();

    let aprovadas = InscricaoRepo::list(&pool, StatusFilter::Only(InscricaoStatus::Aprovada))
        .await
        .unwrap();
    let ids: Vec<_> = aprovadas.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![third.id, second.id]);

    let pendentes = InscricaoRepo::list(&pool, StatusFilter::Only(InscricaoStatus::Pendente))
        .await
        .unwrap();
    assert_eq!(pendentes.len(), 1);
    assert_eq!(pendentes[0].id, first.id);

    let todos = InscricaoRepo::list(&pool, StatusFilter::Todos).await.unwrap();
    assert_eq!(todos.len(), 3);
    assert_eq!(todos[0].id, third.id);
}

#[tokio::test]
async fn test_update_status_writes_history() {
    let pool = common::test_pool().await;
    let admin = UsuarioRepo::find_by_email(&pool, ADMIN_EMAIL)
        .await
        .unwrap()
        .unwrap();
    let row = InscricaoRepo::create(&pool, &new_inscricao("Carlos")).await.unwrap();

    let updated = InscricaoRepo::update_status(&pool, row.id, InscricaoStatus::Rejeitada, Some(admin.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status(), Some(InscricaoStatus::Rejeitada));
    assert!(updated.updated_at >= row.updated_at);

    // Any status may move to any status, including back.
    InscricaoRepo::update_status(&pool, row.id, InscricaoStatus::Pendente, None)
        .await
        .unwrap();

    let history = InscricaoRepo::status_history(&pool, row.id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].status_anterior, "Pendente");
    assert_eq!(history[0].status_novo, "Rejeitada");
    assert_eq!(history[0].alterado_por, Some(admin.id));
    assert_eq!(history[1].status_novo, "Pendente");
}

#[tokio::test]
async fn test_update_status_of_missing_row_writes_nothing() {
    let pool = common::test_pool().await;
    let result = InscricaoRepo::update_status(&pool, 999, InscricaoStatus::Aprovada, None)
        .await
        .unwrap();
    assert_matches!(result, None);
    assert!(InscricaoRepo::status_history(&pool, 999).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_history_insert_rolls_back_status() {
    let pool = common::test_pool().await;
    let row = InscricaoRepo::create(&pool, &new_inscricao("Rollback")).await.unwrap();

    // A non-existent author violates the history table's foreign key, so the
    // audit insert fails after the status UPDATE already ran.
    let err = InscricaoRepo::update_status(&pool, row.id, InscricaoStatus::Aprovada, Some(4242))
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));

    let after = InscricaoRepo::find_by_id(&pool, row.id).await.unwrap().unwrap();
    assert_eq!(after.status(), Some(InscricaoStatus::Pendente));
    assert!(InscricaoRepo::status_history(&pool, row.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_statistics() {
    let pool = common::test_pool().await;
    let empty = InscricaoRepo::detailed_statistics(&pool).await.unwrap();
    assert_eq!(empty.counts.total, 0);
    assert_eq!(empty.media_renda, 0.0);
    assert_eq!(empty.media_membros, 0.0);

    let mut a = new_inscricao("A");
    a.renda_familiar = 1000.0;
    a.membros_familia = 2;
    let mut b = new_inscricao("B");
    b.renda_familiar = 3000.0;
    b.membros_familia = 5;
    InscricaoRepo::create(&pool, &a).await.unwrap();
    let b = InscricaoRepo::create(&pool, &b).await.unwrap();
    InscricaoRepo::update_status(&pool, b.id, InscricaoStatus::Aprovada, None)
        .await
        .unwrap();

    let stats = InscricaoRepo::detailed_statistics(&pool).await.unwrap();
    assert_eq!(stats.counts.total, 2);
    assert_eq!(stats.counts.pendentes, 1);
    assert_eq!(stats.counts.aprovadas, 1);
    assert_eq!(stats.counts.rejeitadas, 0);
    assert_eq!(stats.media_renda, 2000.0);
    assert_eq!(stats.media_membros, 3.5);
    assert_eq!(stats.counts.percentage(InscricaoStatus::Aprovada), 50.0);
}

#[test]
fn test_status_filter_labels() {
    for label in StatusFilter::LABELS {
        assert_eq!(StatusFilter::from_label(label).map(StatusFilter::label), Some(label));
    }
    assert_eq!(StatusFilter::from_label("Arquivada"), None);
    assert_eq!(StatusFilter::default(), StatusFilter::Todos);
}
