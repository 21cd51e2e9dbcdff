use axum::Json;

use mindcare_instruments::questionnaire::Questionnaire;

pub async fn get_questionnaire() -> Json<&'static Questionnaire> {
    Json(mindcare_instruments::questionnaire())
}
