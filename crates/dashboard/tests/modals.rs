mod common;

use common::{draft, food, mounted_dashboard, Call, FakeGateway, Op};
use menu_core::food::FoodDraft;

#[tokio::test]
async fn add_modal_starts_with_empty_form() {
    let gw = FakeGateway::new();
    let dashboard = mounted_dashboard(&gw).await;

    assert_eq!(dashboard.add_modal().initial_form(), FoodDraft::default());
}

#[tokio::test]
async fn add_modal_submit_creates_and_closes() {
    let gw = FakeGateway::new();
    let dashboard = mounted_dashboard(&gw).await;
    dashboard.open_add_modal().await;

    let modal = dashboard.add_modal();
    assert!(modal.is_open().await);
    modal.submit(draft("Salad", "9.90")).await;

    assert!(!modal.is_open().await);
    assert_eq!(dashboard.records().await.len(), 1);
}

#[tokio::test]
async fn add_modal_closes_even_when_create_fails() {
    let gw = FakeGateway::new();
    let dashboard = mounted_dashboard(&gw).await;
    dashboard.open_add_modal().await;
    gw.fail(Op::Create);

    dashboard.add_modal().submit(draft("Salad", "9.90")).await;

    assert!(!dashboard.is_add_modal_open().await);
    assert!(dashboard.records().await.is_empty());
}

#[tokio::test]
async fn edit_modal_has_no_form_before_selection() {
    let gw = FakeGateway::new();
    let dashboard = mounted_dashboard(&gw).await;

    assert_eq!(dashboard.edit_modal().initial_form().await, None);
}

#[tokio::test]
async fn edit_modal_prefills_from_editing_food() {
    let gw = FakeGateway::with_foods(vec![food(1, "Pizza")]);
    let dashboard = mounted_dashboard(&gw).await;

    dashboard.begin_edit(food(1, "Pizza")).await;
    let form = dashboard.edit_modal().initial_form().await.unwrap();

    assert_eq!(form.name, "Pizza");
    assert_eq!(form.description, "Pizza description");
    assert_eq!(form.price, "19.90");
    assert_eq!(form.image, "http://img.test/1.png");
}

#[tokio::test]
async fn edit_modal_submit_updates_and_closes() {
    let gw = FakeGateway::with_foods(vec![food(1, "Pizza")]);
    let dashboard = mounted_dashboard(&gw).await;
    dashboard.begin_edit(food(1, "Pizza")).await;

    let modal = dashboard.edit_modal();
    let mut form = modal.initial_form().await.unwrap();
    form.name = "Pizza Supreme".into();
    modal.submit(form).await;

    assert!(!modal.is_open().await);
    assert_eq!(dashboard.records().await[0].name, "Pizza Supreme");
    assert_eq!(dashboard.records().await[0].price, "19.90");
}

#[tokio::test]
async fn edit_modal_closes_even_when_update_fails() {
    let gw = FakeGateway::with_foods(vec![food(1, "Pizza")]);
    let dashboard = mounted_dashboard(&gw).await;
    dashboard.begin_edit(food(1, "Pizza")).await;
    gw.fail(Op::Update);

    dashboard.edit_modal().submit(draft("Pizza Supreme", "24.90")).await;

    assert!(!dashboard.is_edit_modal_open().await);
    assert_eq!(dashboard.records().await, vec![food(1, "Pizza")]);
    assert!(matches!(gw.calls().last(), Some(Call::Update(1, _))));
}
