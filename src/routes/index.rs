use axum::response::Html;

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Products API</title>
</head>
<body>
    <h1>Products API</h1>
    <p>A minimal CRUD API for products with schemaless JSON fields.</p>
    <ul>
        <li><code>GET /api/products/</code> &mdash; list products</li>
        <li><code>POST /api/products/</code> &mdash; create a product</li>
        <li><code>GET /api/products/{id}/</code> &mdash; retrieve a product</li>
        <li><code>PUT /api/products/{id}/</code> &mdash; merge-update a product</li>
        <li><code>PATCH /api/products/{id}/</code> &mdash; merge-update a product</li>
        <li><code>DELETE /api/products/{id}/</code> &mdash; delete a product</li>
    </ul>
</body>
</html>
"#;

pub async fn product_index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
