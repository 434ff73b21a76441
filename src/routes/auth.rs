use crate::{
    auth::{
        hash_password, issue_token, verify_password, verify_token, AuthResponse, BearerToken,
        LoginRequest, SignupRequest, VerifyResponse, INVALID_CREDENTIALS,
    },
    config::Config,
    error::AppError,
    models::PublicUser,
    store::users,
};
use actix_web::{post, route, web, HttpResponse, Responder};
use chrono::Utc;
use sqlx::PgPool;

/// Create a new user account.
///
/// Validates the payload, rejects duplicate emails with 409, hashes the
/// password, and returns a fresh token alongside the public user shape.
/// The existence check and the insert are not atomic; the unique constraint
/// on `email` catches the losing side of a concurrent signup.
#[post("/signup")]
pub async fn signup(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    body: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    let (email, password, name) = body.into_inner().validate()?;

    if users::find_by_email(&pool, &email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".into()));
    }

    let password_hash = hash_password(&password)?;
    let user = users::insert(&pool, &email, &password_hash, &name).await?;
    let token = issue_token(&user, &config.jwt_secret)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        message: "User created successfully".into(),
        token,
        user: PublicUser::from(&user),
    }))
}

/// Authenticate with email and password.
///
/// Unknown email and wrong password return byte-identical 401 bodies; nothing
/// in the response reveals which check failed. A successful login stamps
/// `last_login` before issuing the token.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    body: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let (email, password) = body.into_inner().validate()?;

    let user = match users::find_by_email(&pool, &email).await? {
        Some(user) => user,
        None => return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into())),
    };

    if !verify_password(&password, &user.password_hash)? {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    users::update_last_login(&pool, user.id, Utc::now()).await?;
    let token = issue_token(&user, &config.jwt_secret)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        message: "Login successful".into(),
        token,
        user: PublicUser::from(&user),
    }))
}

/// Check a bearer token and confirm its subject still exists.
///
/// The account is re-fetched by the claimed email rather than trusted from
/// the claims, so a deleted user yields 404 even with a valid signature.
#[route("/verifyToken", method = "GET", method = "POST")]
pub async fn verify(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    auth: BearerToken,
) -> Result<impl Responder, AppError> {
    let claims = verify_token(&auth.0, &config.jwt_secret)?;

    let user = users::find_by_email(&pool, &claims.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(HttpResponse::Ok().json(VerifyResponse {
        valid: true,
        user: PublicUser::from(&user),
    }))
}
