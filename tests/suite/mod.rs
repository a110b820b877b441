mod detail_view;
mod navigation;
mod rendering;
