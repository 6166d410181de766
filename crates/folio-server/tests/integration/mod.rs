mod page;
mod routes;
