mod resources;
mod shapes;


pub(crate) use resources::ResourceConverter;
pub(crate) use shapes::ShapeConverter;
