use actix_web::web;

pub mod customer;
pub mod health;
pub mod order;
pub mod product;
pub mod report;
pub mod restaurant;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));

    // literal segments are registered before the `{id}` catch-alls
    cfg.service(
        web::scope("/customers")
            .service(customer::create::create)
            .service(customer::lookup::search)
            .service(customer::lookup::get_by_email)
            .service(customer::lookup::list_active)
            .service(customer::lookup::get_by_id)
            .service(customer::update::update)
            .service(customer::toggle::toggle),
    );
    cfg.service(
        web::scope("/restaurants")
            .service(restaurant::create::create)
            .service(restaurant::lookup::search)
            .service(restaurant::lookup::by_category)
            .service(restaurant::lookup::list_active)
            .service(restaurant::lookup::get_by_id)
            .service(restaurant::update::update)
            .service(restaurant::toggle::toggle),
    );
    cfg.service(
        web::scope("/products")
            .service(product::create::create)
            .service(product::lookup::search)
            .service(product::lookup::by_restaurant)
            .service(product::lookup::list_available)
            .service(product::lookup::get_by_id)
            .service(product::update::update)
            .service(product::remove::remove),
    );
    cfg.service(
        web::scope("/orders")
            .service(order::create::create)
            .service(order::lookup::get_by_number)
            .service(order::lookup::list_by_customer)
            .service(order::lookup::list_by_status)
            .service(order::lookup::get_by_id)
            .service(order::status::update_status)
            .service(order::cancel::cancel),
    );
    cfg.service(
        web::scope("/reports")
            .service(report::sales)
            .service(report::sales_by_restaurant),
    );
}
