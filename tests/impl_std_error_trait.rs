use pexels::client::Client;

#[test]
fn impl_std_error_trait() -> Result<(), Box<dyn std::error::Error>> {
    Client::with_base_url("https://api.pexels.com/v1/", "my-api-key")?;

    Ok(())
}

#[test]
fn errors_convert_into_boxed_errors() {
    fn make() -> Result<Client, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Client::with_base_url("not a url", "my-api-key")?)
    }

    assert!(make().is_err());
}
