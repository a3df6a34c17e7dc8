use anyhow::Context;
use tracing::{error, info, Instrument};
use quickserve::app_system::{setup_tracing, AppConfig, QuickServeSystem};
use quickserve::views::OrderTab;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    info!(?config, "Starting QuickServe demo");

    // Create the entire system (starts all services)
    let system = QuickServeSystem::new(config);

    // A guest orders from the table
    let customer = system.customer_view(system.guest_session())?;
    let span = tracing::info_span!("customer_checkout");
    let placed = async {
        customer.add_to_cart("r1", "m1", None, None).await?;
        customer.add_to_cart("r1", "m1", None, None).await?;
        customer.add_to_cart("r1", "m2", Some("Large".into()), None).await?;

        let summary = customer.checkout_summary().await?;
        info!(subtotal = summary.subtotal, fee = summary.service_fee, total = summary.total, "Checkout summary");

        customer.place_order().await
    }
    .instrument(span)
    .await?;

    let Some(order) = placed else {
        error!("Nothing was ordered");
        return Ok(());
    };
    info!(order_id = %order.id, total = order.total, "Order placed");

    // The vendor works the order through
    let vendor = system.vendor_view(system.login("burgerhub", "vendorpassword").await?)?;
    let span = tracing::info_span!("vendor_board", restaurant_id = %vendor.restaurant_id());
    async {
        let pending = vendor.orders_in_tab(OrderTab::Pending).await?;
        info!(pending = pending.len(), "Orders waiting");

        vendor.accept_order(&order.id).await?;
        vendor.complete_order(&order.id).await?;

        match vendor.reject_order(&order.id).await {
            Ok(_) => error!("Completed order was cancelled"),
            Err(e) => info!(error = %e, "Completed order stays completed"),
        }
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;

    // The admin looks at the numbers
    let admin = system.admin_view(system.login("admin", "adminpassword").await?)?;
    let stats = admin.stats().await?;
    let sales = admin.sales_report().await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    println!("{}", serde_json::to_string_pretty(&sales)?);

    // Views hold client clones; drop them so the actors can stop
    drop(customer);
    drop(vendor);
    drop(admin);
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Application completed successfully");
    Ok(())
}
