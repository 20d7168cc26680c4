use super::messages::Message;
use super::state::{
    ASIDE_WIDTH_PX, App, CART_PANEL_WIDTH_PX, LABEL_ADD_TO_CART, LABEL_IMAGE_ERROR,
    LABEL_IN_STOCK, LABEL_LOADING, LABEL_NEXT, LABEL_OUT_OF_STOCK, LABEL_PREVIOUS,
    LABEL_SHIPPING, LABEL_WISHLIST, THUMBNAIL_HEIGHT_PX, THUMBNAIL_SCROLL_ID, VIEWER_SCROLL_ID,
    slide_container_id, thumbnail_container_id,
};
use crate::assets::ImageSlot;
use crate::carousel::THUMBNAIL_GAP_PX;
use crate::formatting::{format_mileage, format_price};
use iced::alignment::Vertical;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, image, mouse_area, row, scrollable,
    text,
};
use iced::{ContentFit, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text(&self.product.title).size(34),
            text(&self.product.description).size(20),
        ]
        .spacing(4);

        let texts = self.column_texts();

        let mut left_col: Column<'_, Message> =
            column![self.slider(), self.thumbnail_strip()].spacing(8);
        for notice in texts.left {
            left_col = left_col.push(text(notice).size(18));
        }

        let info_cols = row![
            container(left_col).width(Length::Fixed(self.config.slide_width)),
            self.aside(texts.aside),
        ]
        .spacing(24);

        let description = column![
            text(&self.product.title).size(26),
            text(&self.product.description).size(18),
            text(&self.product.details),
        ]
        .spacing(6);

        let page = scrollable(
            column![header, info_cols, description]
                .spacing(24)
                .padding(24)
                .width(Length::Fill),
        )
        .height(Length::Fill);

        let mut layout: Row<'_, Message> = row![container(page).width(Length::Fill)].spacing(16);
        if self.store.is_cart_open() {
            layout = layout.push(self.cart_panel());
        }
        layout.into()
    }

    fn slider(&self) -> Element<'_, Message> {
        let slide_width = self.config.slide_width;
        let slide_height = self.config.slide_height;
        let current = self.carousel.current_index();
        let slides = (0..self.carousel.len()).map(|index| {
            let content: Element<'_, Message> = match self.gallery.slot(index) {
                Some(ImageSlot::Loaded(loaded)) => image(loaded.full.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
                Some(ImageSlot::Failed) => text(LABEL_IMAGE_ERROR).into(),
                _ => text(LABEL_LOADING).into(),
            };
            let slide = container(content)
                .id(slide_container_id(index))
                .center_x(Length::Fixed(slide_width))
                .center_y(Length::Fixed(slide_height));
            let slide: Element<'_, Message> = if index == current {
                slide.style(container::rounded_box).into()
            } else {
                slide.into()
            };
            slide
        });

        let viewer = scrollable(Row::with_children(slides))
            .direction(Direction::Horizontal(Scrollbar::default()))
            .id(VIEWER_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::ViewerScrolled {
                offset_x: viewport.absolute_offset().x,
                viewport_width: viewport.bounds().width,
            })
            .width(Length::Fixed(slide_width));

        let viewer = mouse_area(viewer)
            .on_move(Message::ViewerPointerMoved)
            .on_press(Message::ViewerPressed)
            .on_release(Message::ViewerReleased);

        let last = self.carousel.len().saturating_sub(1);
        let has_images = !self.carousel.is_empty();
        let controls = row![
            button(text(LABEL_PREVIOUS))
                .on_press_maybe((has_images && current > 0).then_some(Message::PreviousImage)),
            horizontal_space(),
            text(self.carousel.counter_label()),
            horizontal_space(),
            button(text(LABEL_NEXT))
                .on_press_maybe((has_images && current < last).then_some(Message::NextImage)),
        ]
        .align_y(Vertical::Center)
        .width(Length::Fixed(slide_width));

        column![viewer, controls].spacing(6).into()
    }

    fn thumbnail_strip(&self) -> Element<'_, Message> {
        let frame_width = self.config.thumbnail_width;
        let has_error = self.gallery.has_error();
        let current = self.carousel.current_index();

        let frames = (0..self.carousel.len()).map(|index| {
            let content: Element<'_, Message> = match (has_error, self.gallery.slot(index)) {
                (false, Some(ImageSlot::Loaded(loaded))) => mouse_area(
                    image(loaded.thumbnail.clone())
                        .content_fit(ContentFit::Cover)
                        .width(Length::Fill)
                        .height(Length::Fill),
                )
                .on_press(Message::ThumbnailClicked(index))
                .into(),
                _ => horizontal_space().into(),
            };
            let frame = container(content)
                .id(thumbnail_container_id(index))
                .width(Length::Fixed(frame_width))
                .height(Length::Fixed(THUMBNAIL_HEIGHT_PX));
            let frame: Element<'_, Message> = if index == current {
                frame.style(container::bordered_box).into()
            } else {
                frame.into()
            };
            frame
        });

        let strip = scrollable(Row::with_children(frames).spacing(THUMBNAIL_GAP_PX))
            .direction(Direction::Horizontal(Scrollbar::default()))
            .id(THUMBNAIL_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::ThumbnailsScrolled {
                offset_x: viewport.absolute_offset().x,
            })
            .width(Length::Fixed(self.config.slide_width));

        let mut col: Column<'_, Message> = Column::new().spacing(4);
        if self.gallery.is_loading() {
            col = col.push(text(LABEL_LOADING));
        }
        col = col.push(strip);
        if has_error {
            col = col.push(text(LABEL_IMAGE_ERROR));
        }
        col.into()
    }

    /// Texts of the two info columns, top to bottom.
    pub(crate) fn column_texts(&self) -> ColumnTexts {
        let stock = StockPresentation::for_product(self.product.in_stock);
        let mut aside = vec![
            AsideLine::new(format_price(self.product.price), 30.0),
            AsideLine::new(stock.availability, 18.0),
            AsideLine::new(self.product.product_info.as_str(), BODY_TEXT_SIZE),
        ];
        if let Some(km) = self.product.mileage {
            aside.push(AsideLine::new(format_mileage(km), BODY_TEXT_SIZE));
        }
        if let Some(shipping) = stock.shipping {
            aside.push(AsideLine::new(shipping, BODY_TEXT_SIZE));
        }
        ColumnTexts {
            left: stock.sold_notice.into_iter().collect(),
            aside,
        }
    }

    fn aside(&self, lines: Vec<AsideLine>) -> Element<'_, Message> {
        let info: Column<'_, Message> = lines
            .into_iter()
            .fold(Column::new().spacing(12), |col, line| {
                col.push(text(line.content).size(line.size))
            });

        let heart = if self.is_in_wishlist() { "♥" } else { "♡" };
        let checkout = row![
            button(text(format!("{heart} {LABEL_WISHLIST}"))).on_press(Message::ToggleWishlist),
            button(text(LABEL_ADD_TO_CART)).on_press(Message::AddToCart),
        ]
        .spacing(8);

        container(info.push(checkout))
            .width(Length::Fixed(ASIDE_WIDTH_PX))
            .into()
    }

    fn cart_panel(&self) -> Element<'_, Message> {
        let mut lines: Column<'_, Message> = column![text("Winkelwagen").size(22)].spacing(8);
        for item in self.store.cart_items() {
            lines = lines.push(
                row![text(&item.title), horizontal_space(), text(format_price(item.price))]
                    .spacing(8),
            );
        }
        lines = lines.push(button(text("Sluiten")).on_press(Message::CloseCart));

        container(lines)
            .padding(16)
            .width(Length::Fixed(CART_PANEL_WIDTH_PX))
            .height(Length::Fill)
            .style(container::bordered_box)
            .into()
    }
}

const BODY_TEXT_SIZE: f32 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AsideLine {
    pub(crate) content: String,
    pub(crate) size: f32,
}

impl AsideLine {
    fn new(content: impl Into<String>, size: f32) -> Self {
        AsideLine {
            content: content.into(),
            size,
        }
    }
}

/// Notices under the image column and lines of the aside.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ColumnTexts {
    pub(crate) left: Vec<&'static str>,
    pub(crate) aside: Vec<AsideLine>,
}

/// Which stock-related texts the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StockPresentation {
    /// Notice under the image column; only shown when sold out.
    pub(crate) sold_notice: Option<&'static str>,
    pub(crate) availability: &'static str,
    pub(crate) shipping: Option<&'static str>,
}

impl StockPresentation {
    pub(crate) fn for_product(in_stock: bool) -> Self {
        if in_stock {
            StockPresentation {
                sold_notice: None,
                availability: LABEL_IN_STOCK,
                shipping: Some(LABEL_SHIPPING),
            }
        } else {
            StockPresentation {
                sold_notice: Some(LABEL_OUT_OF_STOCK),
                availability: LABEL_OUT_OF_STOCK,
                shipping: None,
            }
        }
    }

    #[cfg(test)]
    fn out_of_stock_mentions(&self) -> usize {
        [self.sold_notice, Some(self.availability)]
            .into_iter()
            .flatten()
            .filter(|label| *label == LABEL_OUT_OF_STOCK)
            .count()
    }
}
