// Endpoint groups
//
// Each group is a borrowed view over `WioClient` whose methods map fixed
// arguments onto one `RequestSpec`: verb, path template, body shape,
// token and encoding. No group carries any behavior of its own.

mod boards;
mod cotf;
mod custom;
mod drivers;
mod node;
mod nodes;
mod user;

pub use boards::Boards;
pub use cotf::Cotf;
pub use custom::Custom;
pub use drivers::GroveDriver;
pub use node::Node;
pub use nodes::NodeManagement;
pub use user::User;
