//! End-to-end order creation tests against an in-memory database.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use order_server::db::DbService;
use order_server::db::models::{DocType, Partner, Product, SalesOrder, SalesOrderLine};
use order_server::db::repository::{
    DocTypeRepository, OrderRepository, PartnerRepository, ProductRepository,
};
use order_server::orders::{OrderError, OrderProjection, OrderService};
use shared::request::{CreateOrderRequest, OrderLineRequest};

const CLIENT_ID: i64 = 1;
const ORG_ID: i64 = 1;

const WIDGET_GTIN: &str = "4006381333931";
const GADGET_BARCODE: &str = "BARCODE123";

async fn setup() -> Surreal<Db> {
    let db = DbService::memory().await.unwrap().db;

    let products = ProductRepository::new(db.clone());
    products
        .create(Product {
            id: None,
            code: "P001".into(),
            name: "Widget".into(),
            gtin: Some(WIDGET_GTIN.into()),
            barcode: None,
            uom: "PCE".into(),
            client_id: CLIENT_ID,
            is_active: true,
        })
        .await
        .unwrap();
    products
        .create(Product {
            id: None,
            code: "P002".into(),
            name: "Gadget".into(),
            gtin: None,
            barcode: Some(GADGET_BARCODE.into()),
            uom: "KGM".into(),
            client_id: CLIENT_ID,
            is_active: true,
        })
        .await
        .unwrap();

    let partners = PartnerRepository::new(db.clone());
    partners
        .create(Partner {
            id: None,
            code: "C001".into(),
            name: "Ace Corp".into(),
            org_id: ORG_ID,
        })
        .await
        .unwrap();
    // Same code, different organization. Must never resolve for ORG_ID.
    partners
        .create(Partner {
            id: None,
            code: "C777".into(),
            name: "Other Org Corp".into(),
            org_id: ORG_ID + 1,
        })
        .await
        .unwrap();

    let doc_types = DocTypeRepository::new(db.clone());
    doc_types
        .create(DocType {
            id: None,
            name: "Standard Order".into(),
            base_type: "sales_order".into(),
            client_id: CLIENT_ID,
            is_default: true,
        })
        .await
        .unwrap();
    doc_types
        .create(DocType {
            id: None,
            name: "POS Order".into(),
            base_type: "sales_order".into(),
            client_id: CLIENT_ID,
            is_default: false,
        })
        .await
        .unwrap();

    db
}

fn service(db: &Surreal<Db>) -> OrderService {
    OrderService::new(db.clone(), CLIENT_ID, ORG_ID)
}

fn line(code: &str, qty: i64, price: Option<&str>) -> OrderLineRequest {
    OrderLineRequest {
        gtin_code: code.into(),
        qty: Decimal::from(qty),
        price: price.map(|p| p.parse().unwrap()),
        description: None,
    }
}

fn request(lines: Vec<OrderLineRequest>) -> CreateOrderRequest {
    CreateOrderRequest {
        doc_type_name: None,
        ship_bpartner_code: "C001".into(),
        date_promised: None,
        lines,
    }
}

async fn all_orders(db: &Surreal<Db>) -> Vec<SalesOrder> {
    db.select("sales_order").await.unwrap()
}

async fn all_lines(db: &Surreal<Db>) -> Vec<SalesOrderLine> {
    db.select("sales_order_line").await.unwrap()
}

#[tokio::test]
async fn creates_order_and_projects_totals() {
    let db = setup().await;

    let order_id = service(&db)
        .create_order(&request(vec![line(WIDGET_GTIN, 2, Some("9.99"))]))
        .await
        .unwrap();

    let response = OrderProjection::new(db.clone())
        .project(order_id)
        .await
        .unwrap();

    assert_eq!(response.sales_order_id, order_id.to_string());
    assert_eq!(response.document_no, "SO-1");
    assert_eq!(response.doc_type_name.as_deref(), Some("Standard Order"));
    assert_eq!(response.total_quantity, Decimal::from(2));
    assert_eq!(response.total_amount, "19.98".parse::<Decimal>().unwrap());

    assert_eq!(response.order_lines.len(), 1);
    let detail = &response.order_lines[0];
    assert_eq!(detail.product_code, "P001");
    assert_eq!(detail.gtin_code.as_deref(), Some(WIDGET_GTIN));
    assert_eq!(detail.line_amount, "19.98".parse::<Decimal>().unwrap());

    let header = OrderRepository::new(db.clone())
        .find_by_id(order_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(header.status, "completed");
}

#[tokio::test]
async fn document_numbers_increment_per_order() {
    let db = setup().await;
    let svc = service(&db);
    let projection = OrderProjection::new(db.clone());

    let first = svc
        .create_order(&request(vec![line(WIDGET_GTIN, 1, None)]))
        .await
        .unwrap();
    let second = svc
        .create_order(&request(vec![line(WIDGET_GTIN, 1, None)]))
        .await
        .unwrap();

    assert_eq!(projection.project(first).await.unwrap().document_no, "SO-1");
    assert_eq!(projection.project(second).await.unwrap().document_no, "SO-2");
}

#[tokio::test]
async fn falls_back_to_barcode_for_non_gtin_codes() {
    let db = setup().await;

    let order_id = service(&db)
        .create_order(&request(vec![line(GADGET_BARCODE, 3, None)]))
        .await
        .unwrap();

    let response = OrderProjection::new(db.clone())
        .project(order_id)
        .await
        .unwrap();
    assert_eq!(response.order_lines[0].product_code, "P002");
    assert_eq!(response.order_lines[0].gtin_code, None);

    // Price was omitted, so the line books at zero.
    assert_eq!(response.total_amount, Decimal::ZERO);
    assert_eq!(response.total_quantity, Decimal::from(3));

    // Lines inherit the product's stock UoM.
    let lines = all_lines(&db).await;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].uom, "KGM");
}

#[tokio::test]
async fn unowned_gtin_falls_back_to_barcode() {
    let db = setup().await;

    // A well-formed GTIN-8 that no product carries in its gtin column, but
    // one product uses as its free-form barcode.
    ProductRepository::new(db.clone())
        .create(Product {
            id: None,
            code: "P004".into(),
            name: "Sprocket".into(),
            gtin: None,
            barcode: Some("96385074".into()),
            uom: "PCE".into(),
            client_id: CLIENT_ID,
            is_active: true,
        })
        .await
        .unwrap();

    let order_id = service(&db)
        .create_order(&request(vec![line("96385074", 1, None)]))
        .await
        .unwrap();

    let response = OrderProjection::new(db.clone())
        .project(order_id)
        .await
        .unwrap();
    assert_eq!(response.order_lines[0].product_code, "P004");
}

#[tokio::test]
async fn gtin_owner_wins_over_barcode_decoy() {
    let db = setup().await;

    // A decoy whose free-form barcode happens to equal the widget's GTIN.
    ProductRepository::new(db.clone())
        .create(Product {
            id: None,
            code: "P003".into(),
            name: "Decoy".into(),
            gtin: None,
            barcode: Some(WIDGET_GTIN.into()),
            uom: "PCE".into(),
            client_id: CLIENT_ID,
            is_active: true,
        })
        .await
        .unwrap();

    let order_id = service(&db)
        .create_order(&request(vec![line(WIDGET_GTIN, 1, None)]))
        .await
        .unwrap();

    let response = OrderProjection::new(db.clone())
        .project(order_id)
        .await
        .unwrap();
    assert_eq!(response.order_lines[0].product_code, "P001");
}

#[tokio::test]
async fn unknown_code_aborts_whole_order() {
    let db = setup().await;

    let err = service(&db)
        .create_order(&request(vec![
            line(WIDGET_GTIN, 1, Some("9.99")),
            line("NO-SUCH-CODE", 1, None),
        ]))
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::ProductNotFound(code) if code == "NO-SUCH-CODE"));
    assert!(all_orders(&db).await.is_empty());
    assert!(all_lines(&db).await.is_empty());
}

#[tokio::test]
async fn partner_outside_org_is_rejected() {
    let db = setup().await;

    let mut req = request(vec![line(WIDGET_GTIN, 1, None)]);
    req.ship_bpartner_code = "C777".into();

    let err = service(&db).create_order(&req).await.unwrap_err();

    assert!(matches!(err, OrderError::PartnerNotFound(code) if code == "C777"));
    assert!(all_orders(&db).await.is_empty());
}

#[tokio::test]
async fn named_doc_type_is_used_when_given() {
    let db = setup().await;

    let mut req = request(vec![line(WIDGET_GTIN, 1, None)]);
    req.doc_type_name = Some("POS Order".into());

    let order_id = service(&db).create_order(&req).await.unwrap();

    let response = OrderProjection::new(db.clone())
        .project(order_id)
        .await
        .unwrap();
    assert_eq!(response.doc_type_name.as_deref(), Some("POS Order"));
}

#[tokio::test]
async fn unknown_doc_type_is_rejected() {
    let db = setup().await;

    let mut req = request(vec![line(WIDGET_GTIN, 1, None)]);
    req.doc_type_name = Some("Export Order".into());

    let err = service(&db).create_order(&req).await.unwrap_err();
    assert!(matches!(err, OrderError::DocTypeNotFound(name) if name == "Export Order"));
}

#[tokio::test]
async fn empty_order_is_rejected() {
    let db = setup().await;

    let err = service(&db).create_order(&request(vec![])).await.unwrap_err();
    assert!(matches!(err, OrderError::EmptyOrder));
}

#[tokio::test]
async fn negative_quantity_is_rejected() {
    let db = setup().await;

    let err = service(&db)
        .create_order(&request(vec![line(WIDGET_GTIN, -1, None)]))
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::InvalidQuantity { .. }));
    assert!(all_orders(&db).await.is_empty());
}

#[tokio::test]
async fn promised_date_passes_through_verbatim() {
    let db = setup().await;

    let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
    let mut req = request(vec![line(WIDGET_GTIN, 1, None)]);
    req.date_promised = Some(date);

    let order_id = service(&db).create_order(&req).await.unwrap();

    let header = OrderRepository::new(db.clone())
        .find_by_id(order_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(header.date_promised, Some(date));
}

#[tokio::test]
async fn lines_keep_request_order() {
    let db = setup().await;

    let order_id = service(&db)
        .create_order(&request(vec![
            line(WIDGET_GTIN, 2, Some("9.99")),
            line(GADGET_BARCODE, 5, Some("1.50")),
        ]))
        .await
        .unwrap();

    let response = OrderProjection::new(db.clone())
        .project(order_id)
        .await
        .unwrap();

    assert_eq!(response.order_lines.len(), 2);
    assert_eq!(response.order_lines[0].product_code, "P001");
    assert_eq!(response.order_lines[1].product_code, "P002");
    assert_eq!(
        response.total_amount,
        "27.48".parse::<Decimal>().unwrap()
    );
    assert_eq!(response.total_quantity, Decimal::from(7));

    let lines = OrderRepository::new(db.clone())
        .lines_for(order_id)
        .await
        .unwrap();
    assert_eq!(lines[0].line_no, 10);
    assert_eq!(lines[1].line_no, 20);
}

#[tokio::test]
async fn projection_degrades_when_product_is_gone() {
    let db = setup().await;

    let order_id = service(&db)
        .create_order(&request(vec![line(WIDGET_GTIN, 2, Some("9.99"))]))
        .await
        .unwrap();

    let widget = ProductRepository::new(db.clone())
        .find_by_gtin(WIDGET_GTIN, CLIENT_ID)
        .await
        .unwrap()
        .unwrap();
    let _: Option<Product> = db.delete(widget.id.unwrap()).await.unwrap();

    let response = OrderProjection::new(db.clone())
        .project(order_id)
        .await
        .unwrap();

    let detail = &response.order_lines[0];
    assert_eq!(detail.product_code, "");
    assert_eq!(detail.gtin_code, None);
    // Amounts come from the stored line, not from enrichment.
    assert_eq!(detail.line_amount, "19.98".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn projection_expiry_is_one_day_out() {
    let db = setup().await;

    let order_id = service(&db)
        .create_order(&request(vec![line(WIDGET_GTIN, 1, None)]))
        .await
        .unwrap();

    let response = OrderProjection::new(db.clone())
        .project(order_id)
        .await
        .unwrap();

    let delta = response.expiry_date - Utc::now();
    assert!(delta > Duration::hours(23));
    assert!(delta <= Duration::hours(24));
    assert!(response.formatted_expiry_date.ends_with("UTC"));
}

#[tokio::test]
async fn projecting_missing_order_fails() {
    let db = setup().await;

    let err = OrderProjection::new(db.clone())
        .project(424242)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::OrderNotFound(424242)));
}
