use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{entities::token::Claims, errors::AuthError};

/// Admin identity for handlers mounted under the admin scope.
///
/// `AuthMiddleware` stores the decoded `Claims` in the request extensions;
/// a handler taking `AdminClaims` fails with 401 when they are absent and
/// 403 when the token does not carry the admin flag.
#[derive(Debug)]
pub struct AdminClaims(pub Claims);

impl FromRequest for AdminClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();

        ready(match claims {
            None => Err(AuthError::MissingCredentials.into()),
            Some(claims) if !claims.admin => {
                Err(AuthError::Forbidden("Admin access required".into()).into())
            }
            Some(claims) => Ok(AdminClaims(claims)),
        })
    }
}
