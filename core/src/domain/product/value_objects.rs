use uuid::Uuid;

pub struct CreateProductInput {
    pub name: String,
    pub ingredients: String,
}

pub struct UpdateProductInput {
    pub product_id: Uuid,
    pub name: Option<String>,
    pub ingredients: Option<String>,
}
