//! End-to-end session tests over a static catalog and a mock model.

use std::sync::Arc;

use async_trait::async_trait;
use souq_catalog::{CatalogLoader, CatalogSource, Product, SearchEngine};
use souq_chat::{ChatSession, Role};
use souq_model::{MockChatModel, TurnRole};

struct StaticSource(Vec<Product>);

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> souq_catalog::Result<Vec<Product>> {
        Ok(self.0.clone())
    }
}

fn product(id: i64, name: &str, category: &str) -> Product {
    Product { id, name: name.into(), category: category.into(), ..Product::default() }
}

fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "سماعة لاسلكية", "إكسسوارات"),
        product(2, "باور بانك 20000", "شحن"),
    ]
}

fn engine_over(products: Vec<Product>) -> Arc<SearchEngine> {
    Arc::new(SearchEngine::new(Arc::new(CatalogLoader::new(Arc::new(StaticSource(products))))))
}

#[tokio::test]
async fn turn_appends_user_message_then_grounded_reply() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let model = Arc::new(MockChatModel::new("تفضل، لدينا سماعة لاسلكية بسعر ممتاز"));
    let mut session = ChatSession::new(engine_over(sample_catalog()), model.clone());

    let reply = session.send("عندكم سماعة", None).await;

    assert_eq!(reply.role, Role::Model);
    assert_eq!(reply.text, "تفضل، لدينا سماعة لاسلكية بسعر ممتاز");
    assert_eq!(reply.suggested_products.len(), 1);
    assert_eq!(reply.suggested_products[0].id, 1);

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].text, "عندكم سماعة");
    assert_eq!(messages[1].id, reply.id);

    // The model saw the same products the reply carries.
    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].request.products.len(), 1);
    assert_eq!(calls[0].request.products[0].id, 1);
}

#[tokio::test]
async fn history_excludes_the_current_turn() {
    let model = Arc::new(MockChatModel::new("أهلًا بك"));
    let mut session = ChatSession::new(engine_over(sample_catalog()), model.clone());

    session.send("مرحبا بكم", None).await;
    session.send("عندكم باور بانك؟", None).await;

    let calls = model.calls();
    assert_eq!(calls.len(), 2);

    // First turn: empty history.
    assert!(calls[0].history.is_empty());

    // Second turn: the first exchange only.
    assert_eq!(calls[1].history.len(), 2);
    assert_eq!(calls[1].history[0].role, TurnRole::User);
    assert_eq!(calls[1].history[0].text, "مرحبا بكم");
    assert_eq!(calls[1].history[1].role, TurnRole::Model);
    assert_eq!(calls[1].history[1].text, "أهلًا بك");
}

#[tokio::test]
async fn model_failure_yields_apology_without_cards() {
    let model = Arc::new(MockChatModel::failing());
    let mut session = ChatSession::new(engine_over(sample_catalog()), model);

    let reply = session.send("عندكم سماعة", None).await;

    assert_eq!(reply.role, Role::Model);
    assert!(reply.text.contains("عذرًا"));
    assert!(reply.suggested_products.is_empty());

    // The user's turn is still in the transcript.
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[0].role, Role::User);
}

#[tokio::test]
async fn image_is_carried_through_to_the_model() {
    let model = Arc::new(MockChatModel::new("صورة جميلة"));
    let mut session = ChatSession::new(engine_over(sample_catalog()), model.clone());

    let image = Some(String::from("data:image/png;base64,AAAA"));
    session.send("ما هذا المنتج؟", image.clone()).await;

    assert_eq!(session.messages()[0].image, image);
    assert_eq!(model.calls()[0].request.image, image);
}

#[tokio::test]
async fn degenerate_query_still_gets_a_reply_with_no_cards() {
    let model = Arc::new(MockChatModel::new("كيف أستطيع مساعدتك؟"));
    let mut session = ChatSession::new(engine_over(sample_catalog()), model.clone());

    let reply = session.send("؟", None).await;

    assert!(reply.suggested_products.is_empty());
    assert!(model.calls()[0].request.products.is_empty());
}
