use uuid::Uuid;

pub struct CreateAllergenInput {
    pub name: String,
    pub substances: String,
}

pub struct UpdateAllergenInput {
    pub allergen_id: Uuid,
    pub name: Option<String>,
    pub substances: Option<String>,
}
