//! Request body extractor accepting JSON or URL-encoded forms.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use serde_json::{Map, Value};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A post payload as a JSON value, whatever encoding it arrived in.
///
/// Form fields are all strings, so a form can carry `title`/`body` but never
/// a valid `user_id`; validation reports that like any other type error.
#[derive(Debug)]
pub struct PostBody(pub Value);

impl FromRequest for PostBody {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.content_type() == FORM_CONTENT_TYPE {
            let form = web::Form::<HashMap<String, String>>::from_request(req, payload);
            Box::pin(async move {
                let fields: Map<String, Value> = form
                    .await?
                    .into_inner()
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect();
                Ok(PostBody(Value::Object(fields)))
            })
        } else {
            let json = web::Json::<Value>::from_request(req, payload);
            Box::pin(async move { Ok(PostBody(json.await?.into_inner())) })
        }
    }
}
