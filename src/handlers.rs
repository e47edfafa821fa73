use crate::{controllers::ClientesController, ports::DocumentStore, request::FormRequest};
use serde::Deserialize;
use warp::{hyper::StatusCode, reply::Reply, Filter};

type WarpResult<T> = Result<T, std::convert::Infallible>;

pub fn with_clientes_controller<D: DocumentStore + Clone + Send + Sync + 'static>(
    controller: ClientesController<D>,
) -> impl Filter<Extract = (ClientesController<D>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || controller.clone())
}

pub fn with_json_body<T>() -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone
where
    T: for<'de> Deserialize<'de> + Send,
{
    warp::body::content_length_limit(1024 * 16).and(warp::body::json())
}

/// All screen routes bound to one controller.
pub fn routes<D: DocumentStore + Clone + Send + Sync + 'static>(
    controller: ClientesController<D>,
) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    // GET /clientes
    let screen_route = warp::path!("clientes")
        .and(warp::get())
        .and(with_clientes_controller(controller.clone()))
        .and_then(screen_handler);

    // PUT /form
    let form_route = warp::path!("form")
        .and(warp::put())
        .and(with_clientes_controller(controller.clone()))
        .and(with_json_body())
        .and_then(form_handler);

    // POST /form/submit
    let submit_route = warp::path!("form" / "submit")
        .and(warp::post())
        .and(with_clientes_controller(controller.clone()))
        .and_then(submit_handler);

    // POST /clientes/:id/edit
    let edit_route = warp::path!("clientes" / String / "edit")
        .and(warp::post())
        .and(with_clientes_controller(controller.clone()))
        .and_then(edit_handler);

    // DELETE /clientes/:id
    let delete_route = warp::path!("clientes" / String)
        .and(warp::delete())
        .and(with_clientes_controller(controller))
        .and_then(delete_handler);

    screen_route
        .or(form_route)
        .or(submit_route)
        .or(edit_route)
        .or(delete_route)
}

pub async fn screen_handler<D: DocumentStore + Clone + Send + Sync + 'static>(
    controller: ClientesController<D>,
) -> WarpResult<impl Reply> {
    if controller.mount().await {
        log::debug!("screen mounted");
    }

    let response = warp::reply::json(&controller.view().await);
    Ok(warp::reply::with_status(response, StatusCode::OK))
}

pub async fn form_handler<D: DocumentStore + Clone + Send + Sync + 'static>(
    controller: ClientesController<D>,
    request: FormRequest,
) -> WarpResult<impl Reply> {
    controller.update_form(request).await;

    let response = warp::reply::json(&controller.view().await);
    Ok(warp::reply::with_status(response, StatusCode::OK))
}

pub async fn submit_handler<D: DocumentStore + Clone + Send + Sync + 'static>(
    controller: ClientesController<D>,
) -> WarpResult<impl Reply> {
    // the pending write is detached, its outcome only reaches the log
    let status = match controller.submit().await {
        Some(_) => StatusCode::ACCEPTED,
        None => StatusCode::OK,
    };

    let response = warp::reply::json(&controller.view().await);
    Ok(warp::reply::with_status(response, status))
}

pub async fn edit_handler<D: DocumentStore + Clone + Send + Sync + 'static>(
    id: String,
    controller: ClientesController<D>,
) -> WarpResult<impl Reply> {
    match controller.find(&id).await {
        Some(cliente) => {
            controller.begin_edit(&cliente).await;

            let response = warp::reply::json(&controller.view().await);
            Ok(warp::reply::with_status(response, StatusCode::OK))
        }
        None => Ok(not_found(&id)),
    }
}

pub async fn delete_handler<D: DocumentStore + Clone + Send + Sync + 'static>(
    id: String,
    controller: ClientesController<D>,
) -> WarpResult<impl Reply> {
    match controller.find(&id).await {
        Some(cliente) => {
            // detached like submit, a failed delete only reaches the log
            let _pending = controller.delete(&cliente).await;

            let response = warp::reply::json(&controller.view().await);
            Ok(warp::reply::with_status(response, StatusCode::ACCEPTED))
        }
        None => Ok(not_found(&id)),
    }
}

fn not_found(id: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    log::debug!("cliente {} is not on the screen", id);

    let response = warp::reply::json(&serde_json::json!({
        "status": "NOT_FOUND",
        "message": format!("cliente {} not found", id),
    }));
    warp::reply::with_status(response, StatusCode::NOT_FOUND)
}
