use painel_db::models::inscricao::CreateInscricao;
use painel_db::DbPool;

/// Fresh in-memory database with migrations applied and the admin seeded.
pub async fn test_pool() -> DbPool {
    let pool = painel_db::create_memory_pool().await.unwrap();
    painel_db::prepare(&pool).await.unwrap();
    pool
}

#[allow(dead_code)]
pub fn new_inscricao(nome: &str) -> CreateInscricao {
    CreateInscricao {
        nome_completo: nome.to_string(),
        idade: 34,
        genero: "Feminino".to_string(),
        cpf: None,
        endereco: "Rua das Flores, 10".to_string(),
        telefone: Some("(11) 99999-0000".to_string()),
        email: None,
        renda_familiar: 1500.5,
        membros_familia: 4,
        despesas_mensais: 900.0,
        escolaridade: "Ensino Médio Completo".to_string(),
        situacao_moradia: "Alugada".to_string(),
        observacoes: None,
    }
}
