#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use valida_cpf::adapters::lambda::{handle_gateway_request, GatewayRequest, GatewayResponse};
#[cfg(feature = "lambda")]
use valida_cpf::utils::logger;

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<GatewayRequest>) -> Result<GatewayResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Invoking CPF validation function");

    let response = handle_gateway_request(event.payload);

    tracing::info!(status = response.status_code, "CPF validation function completed");
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
