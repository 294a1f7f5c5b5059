mod common;

use painel_core::hashing::hash_password;
use painel_db::models::usuario::CreateUsuario;
use painel_db::repositories::UsuarioRepo;

fn new_usuario(email: &str) -> CreateUsuario {
    CreateUsuario {
        email: email.to_string(),
        senha: hash_password("segredo1"),
        nome: "Maria".to_string(),
    }
}

#[tokio::test]
async fn test_create_and_find() {
    let pool = common::test_pool().await;
    let created = UsuarioRepo::create(&pool, &new_usuario("maria@programa.gov.br"))
        .await
        .unwrap();

    let by_id = UsuarioRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "maria@programa.gov.br");

    let by_email = UsuarioRepo::find_by_email(&pool, "maria@programa.gov.br")
        .await
        .unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(created.id));
}

#[tokio::test]
async fn test_duplicate_email_is_unique_violation() {
    let pool = common::test_pool().await;
    UsuarioRepo::create(&pool, &new_usuario("dup@programa.gov.br"))
        .await
        .unwrap();
    let err = UsuarioRepo::create(&pool, &new_usuario("dup@programa.gov.br"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("expected unique violation, got {other:?}"),
    }
    assert_eq!(UsuarioRepo::count(&pool).await.unwrap(), 2);
}

#[tokio::test]
async fn test_wrong_password_does_not_authenticate() {
    let pool = common::test_pool().await;
    UsuarioRepo::create(&pool, &new_usuario("joao@programa.gov.br"))
        .await
        .unwrap();
    let found = UsuarioRepo::find_by_credentials(
        &pool,
        "joao@programa.gov.br",
        &hash_password("errada"),
    )
    .await
    .unwrap();
    assert!(found.is_none());
}
