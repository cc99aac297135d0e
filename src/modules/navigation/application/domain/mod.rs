pub mod site_route;
