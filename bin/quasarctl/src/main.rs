use quasarctl::run;

#[tokio::main]
async fn main() {
    let result = run().await;
    let error = match result {
        Err(error) => error,
        Ok(0) => return,
        Ok(num) => std::process::exit(num),
    };

    // Provide better error messages for cases where we can provide suggestions to the user.
    if let Some(quasarctl::ApiNotFound) = error.downcast_ref() {
        eprintln!("{:?}", error);
        eprintln!("Below is a PARTIAL list of likely causes for this error:");
        eprintln!("  * The request was operating on a resource that does not exist (example: a missing VM)");
        eprintln!("  * The version of the Quasar Control Plane does not support the request (try to keep quasarctl to the same version as your deployment)");
        std::process::exit(1);
    }
    if let Some(error) = error.downcast_ref::<quasarctl::ContextNotFound>() {
        eprintln!("{}", error);
        eprintln!(
            "Try configuring it with 'quasarctl context configure --context {}'",
            error.name(),
        );
        std::process::exit(1);
    }
    if let Some(error) = error.downcast_ref::<quasarctl::ScopeError>() {
        eprintln!("{}", error);
        std::process::exit(1);
    }

    // Print the error in detailed format for all other cases.
    eprintln!("{:?}", error);
    std::process::exit(1);
}
