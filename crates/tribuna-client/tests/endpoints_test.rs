//! Integration tests for the account, process, and statistics wrappers.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tribuna_client::{AccountClient, ClientConfig, ProcessClient, Session, StatsClient};
use tribuna_core::models::{NovoProcesso, RegisterRequest, TokenPair};

fn authenticated_session(server: &MockServer) -> Session {
    let tokens = TokenPair {
        access: "a1".to_string(),
        refresh: "r1".to_string(),
    };
    Session::resume(ClientConfig::new(server.uri()), tokens).expect("Failed to create session")
}

fn processo_body(id: &str, titulo: &str) -> serde_json::Value {
    json!({
        "id": id,
        "titulo": titulo,
        "numero_processo": "0001234-56.2026.8.26.0050",
        "tipo_crime": "homicidio",
        "comarca": "São Paulo",
        "vara": "1ª Vara do Júri",
        "reu_nome": "João Souza",
        "vitima_nome": "Carlos Lima",
        "status": "draft",
        "observacoes": "",
        "usuario_nome": "Ana Silva",
        "total_documentos": 2,
        "ultima_analise": null,
        "created_at": "2026-02-10T12:00:00Z",
        "updated_at": "2026-02-10T12:00:00Z"
    })
}

#[tokio::test]
async fn test_register_runs_unauthenticated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register/"))
        .and(body_json(json!({
            "email": "ana@exemplo.com",
            "password": "s3nh4-f0rte",
            "nome_completo": "Ana Silva",
            "oab_numero": "12345",
            "oab_estado": "SP"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Usuário criado com sucesso",
            "user_id": 7
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // An anonymous session is enough; the endpoint takes no bearer token
    let session =
        Session::new(ClientConfig::new(mock_server.uri())).expect("Failed to create session");
    let request = RegisterRequest {
        email: "ana@exemplo.com".to_string(),
        password: "s3nh4-f0rte".to_string(),
        nome_completo: "Ana Silva".to_string(),
        oab_numero: "12345".to_string(),
        oab_estado: "SP".to_string(),
        telefone: None,
        escritorio: None,
    };

    let response = AccountClient::new(session.clone())
        .register(&request)
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.user_id, 7);
    // Registering does not log the user in
    assert!(!session.is_authenticated().await);
}

#[tokio::test]
async fn test_profile_decodes_typed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/profile/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "email": "ana@exemplo.com",
            "nome_completo": "Ana Silva",
            "oab_numero": "12345",
            "oab_estado": "SP",
            "telefone": "+55 11 91234-5678",
            "escritorio": "Silva Advocacia"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let profile = AccountClient::new(authenticated_session(&mock_server))
        .profile()
        .await
        .unwrap();

    assert_eq!(profile.id, 7);
    assert_eq!(profile.nome_completo, "Ana Silva");
    assert_eq!(profile.oab_estado, "SP");
}

#[tokio::test]
async fn test_process_list_unwraps_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/processos/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                processo_body("p1", "Caso A"),
                processo_body("p2", "Caso B")
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let processos = ProcessClient::new(authenticated_session(&mock_server))
        .list()
        .await
        .unwrap();

    assert_eq!(processos.len(), 2);
    assert_eq!(processos[0].titulo, "Caso A");
    assert_eq!(processos[1].id, "p2");
}

#[tokio::test]
async fn test_process_list_accepts_bare_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/processos/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([processo_body("p1", "Caso A")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let processos = ProcessClient::new(authenticated_session(&mock_server))
        .list()
        .await
        .unwrap();

    assert_eq!(processos.len(), 1);
}

#[tokio::test]
async fn test_create_process_sends_minimal_body() {
    let mock_server = MockServer::start().await;

    // Unset optional fields stay out of the request body
    Mock::given(method("POST"))
        .and(path("/api/processos/"))
        .and(body_json(json!({"titulo": "Caso Y"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(processo_body("p9", "Caso Y")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let novo = NovoProcesso {
        titulo: "Caso Y".to_string(),
        ..Default::default()
    };

    let processo = ProcessClient::new(authenticated_session(&mock_server))
        .create(&novo)
        .await
        .unwrap();

    assert_eq!(processo.id, "p9");
    assert_eq!(processo.titulo, "Caso Y");
}

#[tokio::test]
async fn test_process_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/processos/p1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(processo_body("p1", "Caso A")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let processo = ProcessClient::new(authenticated_session(&mock_server))
        .get("p1")
        .await
        .unwrap();

    assert_eq!(processo.comarca, "São Paulo");
    assert_eq!(processo.total_documentos, 2);
    assert!(processo.ultima_analise.is_none());
}

#[tokio::test]
async fn test_documentos_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/processos/p1/documentos/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "d1",
                "nome_arquivo": "denuncia.pdf",
                "arquivo_original": "/media/processos/p1/denuncia.pdf",
                "tipo_documento": "denuncia",
                "texto_extraido": "Trecho extraído do documento.",
                "tamanho_arquivo": 204800,
                "tamanho_formatado": "200.0 KB",
                "processo_titulo": "Caso A",
                "tem_texto_extraido": true,
                "created_at": "2026-02-10T12:00:00Z",
                "updated_at": "2026-02-10T12:00:00Z"
            },
            {
                "id": "d2",
                "nome_arquivo": "laudo.pdf",
                "arquivo_original": "/media/processos/p1/laudo.pdf",
                "tipo_documento": "laudo",
                "tamanho_arquivo": 51200,
                "tamanho_formatado": "50.0 KB",
                "processo_titulo": "Caso A",
                "tem_texto_extraido": false,
                "created_at": "2026-02-10T13:00:00Z",
                "updated_at": "2026-02-10T13:00:00Z"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let docs = ProcessClient::new(authenticated_session(&mock_server))
        .documentos("p1")
        .await
        .unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].texto_extraido.as_deref(), Some("Trecho extraído do documento."));
    assert!(docs[1].texto_extraido.is_none());
    assert!(!docs[1].tem_texto_extraido);
}

#[tokio::test]
async fn test_dashboard_stats_typed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/estatisticas/dashboard/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_processos": 3,
            "total_documentos": 7,
            "total_analises": 2,
            "tokens_utilizados": 51234,
            "tempo_total_analises": "0:14:03",
            "processos_por_status": {"draft": 1, "completed": 2},
            "analises_por_bloco": {"1": 5, "3": 2},
            "documentos_por_tipo": {"denuncia": 4, "laudo": 3},
            "ultima_atividade": "2026-02-09T08:30:00Z",
            "media_tempo_analise": 6.42
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stats = StatsClient::new(authenticated_session(&mock_server))
        .dashboard()
        .await
        .unwrap();

    assert_eq!(stats.total_processos, 3);
    assert_eq!(stats.analises_por_bloco.get(&1), Some(&5));
    assert_eq!(stats.processos_por_status.get("completed"), Some(&2));
    assert_eq!(stats.ultima_atividade.as_deref(), Some("2026-02-09T08:30:00Z"));
}
